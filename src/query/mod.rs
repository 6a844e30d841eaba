//! Derives the ordered incident list from the store and the active query.

pub mod paginate;

pub use paginate::{paginate, total_pages, Page};

use crate::models::{DateRange, Incident, QueryParams, SeverityFilter, SortOrder};

/// Keep incidents matching severity AND search text AND date range.
/// Store order is preserved.
pub fn filter<'a>(
    incidents: &'a [Incident],
    severity: SeverityFilter,
    search: &str,
    date_range: &DateRange,
) -> Vec<&'a Incident> {
    let needle = search.to_lowercase();

    incidents
        .iter()
        .filter(|incident| severity.matches(incident.severity))
        .filter(|incident| needle.is_empty() || incident.mentions(&needle))
        .filter(|incident| date_range.contains(incident.reported_at))
        .collect()
}

/// Order by `reported_at`. Stable, so equal timestamps keep their relative order.
pub fn sort(matches: &mut [&Incident], order: SortOrder) {
    match order {
        SortOrder::Newest => matches.sort_by(|a, b| b.reported_at.cmp(&a.reported_at)),
        SortOrder::Oldest => matches.sort_by(|a, b| a.reported_at.cmp(&b.reported_at)),
    }
}

pub fn run<'a>(incidents: &'a [Incident], params: &QueryParams) -> Vec<&'a Incident> {
    let mut matches = filter(incidents, params.severity, &params.search, &params.date_range);
    sort(&mut matches, params.sort);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::store::seed::sample_incidents;
    use chrono::{TimeZone, Utc};

    fn ids(list: &[&Incident]) -> Vec<String> {
        list.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_all_filter_keeps_everything() {
        let samples = sample_incidents();
        let matched = filter(&samples, SeverityFilter::All, "", &DateRange::default());
        assert_eq!(matched.len(), samples.len());
    }

    #[test]
    fn test_severity_filter_is_exact() {
        let samples = sample_incidents();
        for severity in Severity::ALL {
            let matched = filter(&samples, severity.into(), "", &DateRange::default());
            assert!(!matched.is_empty());
            assert!(matched.iter().all(|i| i.severity == severity));
        }
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let samples = sample_incidents();
        let matched = filter(&samples, SeverityFilter::All, "outage", &DateRange::default());
        assert!(matched.iter().any(|i| i.description.contains("Major Outage")));
        assert!(matched.iter().all(|i| !i.title.starts_with("Biased")));
    }

    #[test]
    fn test_search_matches_title() {
        let samples = sample_incidents();
        let matched = filter(&samples, SeverityFilter::All, "BIASED", &DateRange::default());
        assert_eq!(ids(&matched), vec!["1"]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let samples = sample_incidents();
        let matched = filter(
            &samples,
            Severity::Low.into(),
            "outage",
            &DateRange::default(),
        );
        assert!(matched.is_empty());
    }

    #[test]
    fn test_date_range_inclusive() {
        let samples = sample_incidents();
        let range = DateRange::between(
            Utc.with_ymd_and_hms(2025, 3, 20, 9, 15, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 4, 8, 22, 5, 0).unwrap(),
        );
        let mut matched = filter(&samples, SeverityFilter::All, "", &range);
        sort(&mut matched, SortOrder::Oldest);
        assert_eq!(ids(&matched), vec!["3", "2", "4"]);
    }

    #[test]
    fn test_newest_and_oldest_are_reversed() {
        let samples = sample_incidents();
        let mut newest = run(&samples, &QueryParams::default());
        let oldest = run(
            &samples,
            &QueryParams {
                sort: SortOrder::Oldest,
                ..QueryParams::default()
            },
        );

        newest.reverse();
        assert_eq!(ids(&newest), ids(&oldest));
        assert_eq!(oldest[0].id, "1");
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut samples = sample_incidents();
        let tie = samples[0].reported_at;
        for incident in samples.iter_mut() {
            incident.reported_at = tie;
        }

        let newest = run(&samples, &QueryParams::default());
        assert_eq!(ids(&newest), vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_empty_store_yields_empty_result() {
        assert!(run(&[], &QueryParams::default()).is_empty());
    }
}
