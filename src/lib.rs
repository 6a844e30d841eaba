//! Triage incident dashboard
//!
//! State and derivation logic behind a dashboard for browsing, filtering, and
//! reporting AI safety incidents. The presentation layer stays outside this
//! crate; it reads pages and statistics from a [`dashboard::Dashboard`] and
//! feeds user input back in as [`dashboard::DashboardEvent`]s.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod query;
pub mod repository;
pub mod stats;
pub mod store;

/// Application-wide error types with context preservation
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Validation failed: {}", fields.join("; "))]
    Validation { fields: Vec<String> },

    #[error("A submission is already in progress")]
    Busy,

    #[error("Repository error: {message}")]
    Repository { message: String, context: Option<String> },
}

impl TriageError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a repository error with optional context
    pub fn repository(message: impl Into<String>, context: Option<String>) -> Self {
        Self::Repository {
            message: message.into(),
            context,
        }
    }

    /// Process exit code used by the command-line front end
    pub fn exit_code(&self) -> i32 {
        match self {
            TriageError::Configuration { .. } => 78,
            TriageError::Validation { .. } => 65,
            TriageError::Busy => 75,
            TriageError::Repository { .. } => 69,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TriageError::Configuration { message } => {
                format!("Configuration issue: {}", message)
            }
            TriageError::Validation { fields } => {
                format!("Please fix the incident form: {}", fields.join("; "))
            }
            TriageError::Busy => {
                "An incident is still being submitted, try again once it completes".to_string()
            }
            TriageError::Repository { message, context } => {
                if let Some(ctx) = context {
                    format!("Could not save incident ({}): {}", ctx, message)
                } else {
                    format!("Could not save incident: {}", message)
                }
            }
        }
    }
}

impl From<validator::ValidationErrors> for TriageError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "Field '{}': {}",
                        field,
                        error
                            .message
                            .as_ref()
                            .map(|m| m.as_ref())
                            .unwrap_or("validation error")
                    )
                })
            })
            .collect();
        // field_errors() is backed by a HashMap
        fields.sort();
        Self::Validation { fields }
    }
}

/// Convenience type alias for Results
pub type TriageResult<T> = Result<T, TriageError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    fn with_config_context(self, path: &std::path::Path) -> TriageResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn with_config_context(self, path: &std::path::Path) -> TriageResult<T> {
        self.map_err(|e| {
            TriageError::configuration(format!("{}: {}", path.display(), e.into()))
        })
    }
}
