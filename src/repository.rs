//! Incident repository capability.
//!
//! The submission workflow only talks to [`IncidentRepository`], so a real
//! backend can replace [`SimulatedRepository`] without touching the workflow.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{Incident, IncidentDraft};
use crate::store::IncidentStore;
use crate::TriageResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IncidentRepository: Send + Sync {
    /// Persist a draft, assigning its id and `reported_at`
    async fn add(&self, draft: IncidentDraft) -> TriageResult<Incident>;

    /// Every stored incident in insertion order
    async fn snapshot(&self) -> TriageResult<Vec<Incident>>;
}

/// In-memory repository that waits a fixed latency before each `add`,
/// standing in for a network round-trip.
pub struct SimulatedRepository {
    store: Arc<RwLock<IncidentStore>>,
    latency: Duration,
}

impl SimulatedRepository {
    pub fn new(store: IncidentStore, latency: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            latency,
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl IncidentRepository for SimulatedRepository {
    async fn add(&self, draft: IncidentDraft) -> TriageResult<Incident> {
        debug!("Simulating {}ms round-trip for incident submission", self.latency.as_millis());
        tokio::time::sleep(self.latency).await;

        let mut store = self.store.write().await;
        let stored = store.append(draft, Utc::now()).clone();
        info!(incident_id = %stored.id, total = store.len(), "Incident stored");
        Ok(stored)
    }

    async fn snapshot(&self) -> TriageResult<Vec<Incident>> {
        Ok(self.store.read().await.incidents().to_vec())
    }
}
