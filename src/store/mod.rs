//! In-memory incident store for a single dashboard session.
//!
//! Append-only. Ids come from a counter owned by the store, so they stay
//! unique even if removal or concurrent appends are ever introduced.

pub mod seed;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{Incident, IncidentDraft};

#[derive(Debug, Clone)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
    next_id: u64,
}

impl IncidentStore {
    pub fn new() -> Self {
        Self {
            incidents: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-populated with the bundled sample incidents
    pub fn seeded() -> Self {
        Self::with_incidents(seed::sample_incidents())
    }

    /// Adopt an existing collection. The counter starts past every numeric id
    /// already present and past the collection length.
    pub fn with_incidents(incidents: Vec<Incident>) -> Self {
        let highest = incidents
            .iter()
            .filter_map(|incident| incident.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next_id = highest.max(incidents.len() as u64) + 1;

        Self { incidents, next_id }
    }

    /// Assign the next id and the given timestamp, append, and return the stored record
    pub fn append(&mut self, draft: IncidentDraft, reported_at: DateTime<Utc>) -> &Incident {
        let id = self.next_id.to_string();
        self.next_id += 1;

        debug!(incident_id = %id, severity = %draft.severity, "Appending incident");
        self.incidents.push(Incident::from_draft(id, draft, reported_at));
        &self.incidents[self.incidents.len() - 1]
    }

    pub fn get(&self, id: &str) -> Option<&Incident> {
        self.incidents.iter().find(|incident| incident.id == id)
    }

    /// All incidents in insertion order
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }
}

impl Default for IncidentStore {
    fn default() -> Self {
        Self::new()
    }
}
