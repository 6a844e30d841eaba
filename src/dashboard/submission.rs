//! Incident submission workflow: `Idle -> Submitting -> Idle`.
//!
//! The loading flag is held by a guard, so it drops back to `Idle` on
//! success, on error, and when the submitting future is dropped.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;
use validator::Validate;

use crate::models::{Incident, IncidentDraft};
use crate::repository::IncidentRepository;
use crate::{TriageError, TriageResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

pub struct SubmissionWorkflow {
    repository: Arc<dyn IncidentRepository>,
    state: watch::Sender<SubmissionState>,
}

impl SubmissionWorkflow {
    pub fn new(repository: Arc<dyn IncidentRepository>) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self { repository, state }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    pub fn is_loading(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    /// Watch loading transitions, e.g. to drive a spinner
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Validate the draft, then hand it to the repository while loading.
    /// Rejects with [`TriageError::Busy`] if another submission is in flight.
    pub async fn submit(&self, draft: IncidentDraft) -> TriageResult<Incident> {
        draft.validate()?;

        let _loading = LoadingGuard::acquire(&self.state)?;
        self.repository.add(draft).await
    }
}

struct LoadingGuard<'a> {
    state: &'a watch::Sender<SubmissionState>,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(state: &'a watch::Sender<SubmissionState>) -> TriageResult<Self> {
        let mut acquired = false;
        state.send_if_modified(|current| {
            if *current == SubmissionState::Idle {
                *current = SubmissionState::Submitting;
                acquired = true;
            }
            acquired
        });

        if !acquired {
            return Err(TriageError::Busy);
        }
        debug!("Submission started");
        Ok(Self { state })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_replace(SubmissionState::Idle);
        debug!("Submission finished");
    }
}
