//! Dashboard session.
//!
//! Owns the view state, the submission workflow and the repository for one
//! session, and derives everything the presentation layer reads: the visible
//! page, whole-store statistics and the chart for the selected stat card.

pub mod submission;
pub mod view_state;

pub use submission::{SubmissionState, SubmissionWorkflow};
pub use view_state::{DashboardEvent, ReduceContext, ViewMode, ViewState};

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::config::DashboardSettings;
use crate::log_event;
use crate::models::{Incident, IncidentDraft};
use crate::query::{self, paginate};
use crate::repository::{IncidentRepository, SimulatedRepository};
use crate::stats::{self, ChartPoint, IncidentStats};
use crate::store::IncidentStore;
use crate::TriageResult;

/// What the list view renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub incidents: Vec<Incident>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// Pager is hidden for a single page and while the form is open
    pub show_pagination: bool,
    pub expanded: Option<String>,
    pub mode: ViewMode,
    pub loading: bool,
}

pub struct Dashboard {
    session_id: Uuid,
    settings: DashboardSettings,
    repository: Arc<dyn IncidentRepository>,
    workflow: SubmissionWorkflow,
    view: RwLock<ViewState>,
}

impl Dashboard {
    /// Session backed by the simulated in-memory repository
    pub fn new(settings: DashboardSettings) -> Self {
        let store = if settings.dashboard.seed_sample_data {
            IncidentStore::seeded()
        } else {
            IncidentStore::new()
        };
        let repository = Arc::new(SimulatedRepository::new(store, settings.submit_latency()));
        Self::with_repository(settings, repository)
    }

    pub fn with_repository(settings: DashboardSettings, repository: Arc<dyn IncidentRepository>) -> Self {
        let session_id = Uuid::new_v4();
        log_event!(
            session = session_id,
            info,
            page_size = settings.dashboard.page_size,
            "Dashboard session started"
        );

        Self {
            session_id,
            workflow: SubmissionWorkflow::new(Arc::clone(&repository)),
            repository,
            settings,
            view: RwLock::new(ViewState::default()),
        }
    }

    pub async fn view_state(&self) -> ViewState {
        self.view.read().await.clone()
    }

    /// Apply a user event and return the resulting view state
    pub async fn dispatch(&self, event: DashboardEvent) -> TriageResult<ViewState> {
        let mut view = self.view.write().await;
        let incidents = self.repository.snapshot().await?;

        let matches = query::run(&incidents, &view.query).len();
        let ctx = ReduceContext {
            total_pages: paginate::total_pages(matches, self.settings.dashboard.page_size),
            reset_page_on_query_change: self.settings.dashboard.reset_page_on_query_change,
        };

        Ok(self.apply(&mut view, &event, &ctx))
    }

    fn apply(&self, view: &mut ViewState, event: &DashboardEvent, ctx: &ReduceContext) -> ViewState {
        let next = view.reduce(event, ctx);
        if next.page != view.page {
            debug!(from = view.page, to = next.page, "Page changed");
        }
        log_event!(session = self.session_id, debug, event = ?event, "Dispatched event");

        *view = next.clone();
        next
    }

    pub async fn visible_page(&self) -> TriageResult<PageView> {
        let view = self.view_state().await;
        let incidents = self.repository.snapshot().await?;

        let ordered = query::run(&incidents, &view.query);
        let page = paginate::paginate(&ordered, self.settings.dashboard.page_size, view.page);

        Ok(PageView {
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            show_pagination: view.mode == ViewMode::List && page.total_pages > 1,
            incidents: page.items.into_iter().cloned().collect(),
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_matches: page.total_matches,
            expanded: view.expanded,
            mode: view.mode,
            loading: self.workflow.is_loading(),
        })
    }

    /// Counts over the whole store, ignoring the active filters
    pub async fn statistics(&self) -> TriageResult<IncidentStats> {
        let incidents = self.repository.snapshot().await?;
        Ok(stats::aggregate(&incidents, Utc::now(), self.settings.recent_window()))
    }

    /// Chart series for the selected stat card, if one is selected
    pub async fn selected_chart(&self) -> TriageResult<Option<Vec<ChartPoint>>> {
        let Some(kind) = self.view_state().await.selected_stat else {
            return Ok(None);
        };
        let stats = self.statistics().await?;
        Ok(Some(kind.series(&stats)))
    }

    /// Submit a draft from the incident form. On success the view returns to
    /// the list; on failure the form stays open and the store is unchanged.
    pub async fn submit(&self, draft: IncidentDraft) -> TriageResult<Incident> {
        log_event!(
            session = self.session_id,
            info,
            title = %draft.title,
            severity = %draft.severity,
            "Submitting incident"
        );

        match self.workflow.submit(draft).await {
            Ok(incident) => {
                // The incident is stored; leaving the form must not fail
                let ctx = ReduceContext {
                    reset_page_on_query_change: self.settings.dashboard.reset_page_on_query_change,
                    ..ReduceContext::default()
                };
                let mut view = self.view.write().await;
                self.apply(&mut view, &DashboardEvent::SubmitSucceeded, &ctx);
                drop(view);

                log_event!(incident = incident.id, info, "Incident reported");
                Ok(incident)
            }
            Err(e) => {
                log_event!(session = self.session_id, warn, error = %e, "Submission rejected");
                Err(e)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.workflow.is_loading()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<SubmissionState> {
        self.workflow.subscribe()
    }
}
