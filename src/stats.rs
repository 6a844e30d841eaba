//! Whole-store statistics behind the dashboard's stat cards and chart.
//!
//! Counts always cover the full store, never the filtered view.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Incident, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IncidentStats {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Reported strictly after `now - window`
    pub recent: usize,
    /// Length of the recent window, for labelling the card
    pub recent_window_days: i64,
}

impl IncidentStats {
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

pub fn aggregate(incidents: &[Incident], now: DateTime<Utc>, recent_window: Duration) -> IncidentStats {
    let cutoff = now - recent_window;

    incidents.iter().fold(
        IncidentStats {
            total: incidents.len(),
            recent_window_days: recent_window.num_days(),
            ..IncidentStats::default()
        },
        |mut stats, incident| {
            match incident.severity {
                Severity::High => stats.high += 1,
                Severity::Medium => stats.medium += 1,
                Severity::Low => stats.low += 1,
            }
            if incident.reported_at > cutoff {
                stats.recent += 1;
            }
            stats
        },
    )
}

/// A selectable stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Total,
    High,
    Medium,
    Low,
    Recent,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Total,
        StatKind::High,
        StatKind::Medium,
        StatKind::Low,
        StatKind::Recent,
    ];

    /// Card title; the recent card names the configured window
    pub fn title(&self, stats: &IncidentStats) -> String {
        match self {
            StatKind::Total => "Total Incidents".to_string(),
            StatKind::High => "High Severity".to_string(),
            StatKind::Medium => "Medium Severity".to_string(),
            StatKind::Low => "Low Severity".to_string(),
            StatKind::Recent if stats.recent_window_days == 1 => "Last Day".to_string(),
            StatKind::Recent => format!("Last {} Days", stats.recent_window_days),
        }
    }

    pub fn value(&self, stats: &IncidentStats) -> usize {
        match self {
            StatKind::Total => stats.total,
            StatKind::High => stats.high,
            StatKind::Medium => stats.medium,
            StatKind::Low => stats.low,
            StatKind::Recent => stats.recent,
        }
    }

    /// Bar chart data for this card
    pub fn series(&self, stats: &IncidentStats) -> Vec<ChartPoint> {
        vec![ChartPoint {
            name: self.title(stats),
            value: self.value(stats),
        }]
    }
}

impl std::str::FromStr for StatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "total" => Ok(StatKind::Total),
            "high" => Ok(StatKind::High),
            "medium" => Ok(StatKind::Medium),
            "low" => Ok(StatKind::Low),
            "recent" => Ok(StatKind::Recent),
            other => Err(format!(
                "unknown statistic '{}', expected total, high, medium, low or recent",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::sample_incidents;

    fn week() -> Duration {
        Duration::days(7)
    }

    #[test]
    fn test_counts_partition_total() {
        let samples = sample_incidents();
        let stats = aggregate(&samples, Utc::now(), week());

        assert_eq!(stats.total, 7);
        assert_eq!((stats.high, stats.medium, stats.low), (3, 2, 2));
        assert_eq!(stats.high + stats.medium + stats.low, stats.total);
        for severity in Severity::ALL {
            assert!(stats.count(severity) > 0);
        }
    }

    #[test]
    fn test_recent_window_is_strict() {
        let mut samples = sample_incidents();
        let now = samples[0].reported_at + week();
        // exactly on the cutoff: not recent
        samples.truncate(1);
        assert_eq!(aggregate(&samples, now, week()).recent, 0);

        let just_inside = now - Duration::seconds(1);
        assert_eq!(aggregate(&samples, just_inside, week()).recent, 1);
    }

    #[test]
    fn test_empty_store() {
        let stats = aggregate(&[], Utc::now(), week());
        assert_eq!(
            (stats.total, stats.high, stats.medium, stats.low, stats.recent),
            (0, 0, 0, 0, 0)
        );
    }

    #[test]
    fn test_recent_title_follows_window() {
        let samples = sample_incidents();

        let weekly = aggregate(&samples, Utc::now(), week());
        assert_eq!(StatKind::Recent.title(&weekly), "Last 7 Days");

        let fortnight = aggregate(&samples, Utc::now(), Duration::days(14));
        assert_eq!(StatKind::Recent.title(&fortnight), "Last 14 Days");
        assert_eq!(StatKind::Recent.series(&fortnight)[0].name, "Last 14 Days");

        let daily = aggregate(&samples, Utc::now(), Duration::days(1));
        assert_eq!(StatKind::Recent.title(&daily), "Last Day");
    }

    #[test]
    fn test_chart_series_for_card() {
        let stats = aggregate(&sample_incidents(), Utc::now(), week());
        let series = StatKind::High.series(&stats);
        assert_eq!(
            series,
            vec![ChartPoint {
                name: "High Severity".to_string(),
                value: 3
            }]
        );
    }
}
