//! CLI utility functions.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::path::PathBuf;
use tracing::info;

use crate::config::DashboardSettings;
use crate::dashboard::PageView;
use crate::models::DateRange;
use crate::stats::{ChartPoint, IncidentStats, StatKind};

/// Load settings from an explicit file, or fall back to the default location
pub fn load_settings(config_path: Option<PathBuf>) -> Result<DashboardSettings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            info!("Using custom config file: {}", path.display());
            Ok(DashboardSettings::load_from(Some(&path))?)
        }
        None => Ok(DashboardSettings::load()?),
    }
}

/// Parse RFC 3339, or a bare `YYYY-MM-DD` taken as the start (or end) of that UTC day
pub fn parse_timestamp(value: &str, end_of_day: bool) -> Result<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        anyhow::anyhow!("Invalid date '{}': expected RFC 3339 or YYYY-MM-DD", value)
    })?;
    let time = if end_of_day {
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
    } else {
        NaiveTime::from_hms_opt(0, 0, 0)
    }
    .ok_or_else(|| anyhow::anyhow!("Invalid time of day"))?;

    Ok(date.and_time(time).and_utc())
}

pub fn parse_date_range(from: Option<&str>, to: Option<&str>) -> Result<DateRange> {
    let start = from.map(|value| parse_timestamp(value, false)).transpose()?;
    let end = to.map(|value| parse_timestamp(value, true)).transpose()?;
    Ok(DateRange::new(start, end))
}

/// Print the visible page the way the list view lays it out
pub fn print_page(page: &PageView) {
    if page.incidents.is_empty() {
        println!("No incidents match the current filters.");
    }

    for incident in &page.incidents {
        println!("{}", incident);
        if page.expanded.as_deref() == Some(incident.id.as_str()) {
            for line in incident.description.lines() {
                println!("    {}", line);
            }
        }
    }

    if page.show_pagination {
        println!();
        let mut footer = format!(
            "Page {} of {} ({} matching)",
            page.current_page, page.total_pages, page.total_matches
        );
        if page.has_previous {
            footer.push_str(&format!("  previous: --page {}", page.current_page - 1));
        }
        if page.has_next {
            footer.push_str(&format!("  next: --page {}", page.current_page + 1));
        }
        println!("{}", footer);
    }
}

pub fn print_stats(stats: &IncidentStats, chart: Option<&[ChartPoint]>) {
    for kind in StatKind::ALL {
        println!("{:<16} {}", kind.title(stats), kind.value(stats));
    }

    if let Some(points) = chart {
        let widest = points.iter().map(|p| p.value).max().unwrap_or(0).max(1);
        println!();
        for point in points {
            let bar = "#".repeat(point.value * 40 / widest);
            println!("{:<16} {} {}", point.name, bar, point.value);
        }
    }
}
