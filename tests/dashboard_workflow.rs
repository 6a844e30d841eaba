use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio_test::{assert_pending, assert_ready};
use triage::dashboard::{Dashboard, DashboardEvent, SubmissionState, ViewMode};
use triage::models::{IncidentDraft, Severity, SeverityFilter};
use triage::TriageError;

mod common;
use common::{dashboard_with, draft, seven_incidents, settings, MockRepository};

#[tokio::test(start_paused = true)]
async fn test_submit_appends_with_next_id_and_returns_to_list() {
    let dashboard = dashboard_with(seven_incidents()[..3].to_vec(), settings(5, 1000));
    dashboard.dispatch(DashboardEvent::FormOpened).await.unwrap();

    let mut submission = tokio_test::task::spawn(dashboard.submit(draft("X")));
    assert_pending!(submission.poll());
    assert!(dashboard.is_loading());
    assert_eq!(dashboard.visible_page().await.unwrap().total_matches, 3);

    tokio::time::advance(Duration::from_millis(1000)).await;
    let stored = assert_ready!(submission.poll()).unwrap();

    assert_eq!(stored.id, "4");
    assert_eq!(stored.title, "X");
    assert!(Utc::now() - stored.reported_at < chrono::Duration::seconds(1));
    assert!(!dashboard.is_loading());

    let page = dashboard.visible_page().await.unwrap();
    assert_eq!(page.mode, ViewMode::List);
    assert_eq!(page.total_matches, 4);
    assert_eq!(dashboard.statistics().await.unwrap().total, 4);
}

#[tokio::test(start_paused = true)]
async fn test_ui_stays_responsive_while_submitting() {
    let dashboard = Arc::new(dashboard_with(seven_incidents(), settings(5, 1000)));
    let mut loading = dashboard.subscribe_loading();

    let task = {
        let dashboard = Arc::clone(&dashboard);
        tokio::spawn(async move { dashboard.submit(draft("late night report")).await })
    };

    loading.changed().await.unwrap();
    assert_eq!(*loading.borrow(), SubmissionState::Submitting);

    // Filtering still works while the submission is suspended
    let view = dashboard
        .dispatch(DashboardEvent::SeverityChanged(Severity::Low.into()))
        .await
        .unwrap();
    assert_eq!(view.query.severity, SeverityFilter::Only(Severity::Low));
    assert!(dashboard.visible_page().await.unwrap().loading);

    let stored = task.await.unwrap().unwrap();
    assert_eq!(stored.id, "8");
    assert_eq!(*loading.borrow_and_update(), SubmissionState::Idle);
    assert!(!dashboard.visible_page().await.unwrap().loading);
}

#[tokio::test]
async fn test_failed_submission_keeps_form_open() {
    let mut repository = MockRepository::new();
    repository
        .expect_add()
        .times(1)
        .returning(|_| Err(TriageError::repository("connection reset", Some("add".into()))));
    repository.expect_snapshot().returning(|| Ok(seven_incidents()));

    let dashboard = Dashboard::with_repository(settings(5, 0), Arc::new(repository));
    dashboard.dispatch(DashboardEvent::FormOpened).await.unwrap();

    let result = dashboard.submit(draft("X")).await;

    assert!(matches!(result, Err(TriageError::Repository { .. })));
    assert!(!dashboard.is_loading());
    assert_eq!(dashboard.view_state().await.mode, ViewMode::Form);
}

#[tokio::test]
async fn test_stored_incident_reported_even_if_backend_reads_fail_afterwards() {
    let mut repository = MockRepository::new();
    repository
        .expect_add()
        .times(1)
        .returning(|_| Ok(common::incident("8", "X", "desc", Severity::High, 7)));
    let reads = AtomicUsize::new(0);
    repository.expect_snapshot().returning(move || {
        if reads.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(seven_incidents())
        } else {
            Err(TriageError::repository("offline", Some("snapshot".into())))
        }
    });

    let dashboard = Dashboard::with_repository(settings(5, 0), Arc::new(repository));
    dashboard.dispatch(DashboardEvent::FormOpened).await.unwrap();

    let stored = dashboard.submit(draft("X")).await.unwrap();

    assert_eq!(stored.id, "8");
    assert_eq!(dashboard.view_state().await.mode, ViewMode::List);
    assert!(!dashboard.is_loading());
}

#[tokio::test]
async fn test_blank_form_is_rejected_without_touching_store() {
    let dashboard = dashboard_with(seven_incidents(), settings(5, 0));
    dashboard.dispatch(DashboardEvent::FormOpened).await.unwrap();

    let result = dashboard
        .submit(IncidentDraft::new("  ", "", Severity::High))
        .await;

    match result {
        Err(TriageError::Validation { fields }) => {
            assert_eq!(fields.len(), 2);
            assert!(fields[0].contains("description"));
            assert!(fields[1].contains("title"));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(dashboard.statistics().await.unwrap().total, 7);
    assert_eq!(dashboard.view_state().await.mode, ViewMode::Form);
}

#[tokio::test]
async fn test_sequential_submissions_get_distinct_ids() {
    let dashboard = dashboard_with(seven_incidents(), settings(5, 0));

    let first = dashboard.submit(draft("first")).await.unwrap();
    let second = dashboard.submit(draft("second")).await.unwrap();

    assert_eq!(first.id, "8");
    assert_eq!(second.id, "9");
}

#[tokio::test]
async fn test_new_incident_counts_as_recent() {
    let dashboard = dashboard_with(seven_incidents(), settings(5, 0));
    assert_eq!(dashboard.statistics().await.unwrap().recent, 0);

    dashboard
        .submit(IncidentDraft::new("Fresh", "Just happened", Severity::High))
        .await
        .unwrap();

    let stats = dashboard.statistics().await.unwrap();
    assert_eq!(stats.recent, 1);
    assert_eq!(stats.high, 4);
}
