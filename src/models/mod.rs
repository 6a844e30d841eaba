// Public exports for data models

pub mod incident;
pub mod query;

pub use incident::{Incident, IncidentDraft, Severity};
pub use query::{DateRange, QueryParams, SeverityFilter, SortOrder};
