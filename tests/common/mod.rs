#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use mockall::mock;
use std::sync::Arc;

use triage::config::{init_test_logging, DashboardSettings};
use triage::dashboard::Dashboard;
use triage::models::{Incident, IncidentDraft, Severity};
use triage::repository::{IncidentRepository, SimulatedRepository};
use triage::store::IncidentStore;
use triage::TriageResult;

mock! {
    pub Repository {}

    #[async_trait]
    impl IncidentRepository for Repository {
        async fn add(&self, draft: IncidentDraft) -> TriageResult<Incident>;
        async fn snapshot(&self) -> TriageResult<Vec<Incident>>;
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub fn incident(id: &str, title: &str, description: &str, severity: Severity, day: i64) -> Incident {
    Incident {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        severity,
        reported_at: base_time() + Duration::days(day),
    }
}

/// Seven incidents, one per day: 3 High, 2 Medium, 2 Low
pub fn seven_incidents() -> Vec<Incident> {
    vec![
        incident("1", "Bias", "Screening model rejects older applicants", Severity::High, 0),
        incident("2", "Checkout assistant down", "Major Outage in the EU region", Severity::High, 1),
        incident("3", "Toxic completion", "Filter missed a slur in Dutch", Severity::Medium, 2),
        incident("4", "Jailbreak", "Roleplay prompt bypassed refusals", Severity::High, 3),
        incident("5", "Stale answers", "Retriever served last year's pricing", Severity::Low, 4),
        incident("6", "Voice clone misuse", "Cloned voice used in a support call", Severity::Medium, 5),
        incident("7", "Typo in disclaimer", "Safety banner misspelled", Severity::Low, 6),
    ]
}

pub fn settings(page_size: usize, latency_ms: u64) -> DashboardSettings {
    let mut settings = DashboardSettings::default();
    settings.dashboard.page_size = page_size;
    settings.submission.latency_ms = latency_ms;
    settings
}

pub fn dashboard_with(incidents: Vec<Incident>, settings: DashboardSettings) -> Dashboard {
    let _ = init_test_logging();
    let repository = Arc::new(SimulatedRepository::new(
        IncidentStore::with_incidents(incidents),
        settings.submit_latency(),
    ));
    Dashboard::with_repository(settings, repository)
}

pub fn draft(title: &str) -> IncidentDraft {
    IncidentDraft::new(title, "Reported through the incident form", Severity::Medium)
}
