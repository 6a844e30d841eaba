//! Configuration validation for the triage dashboard

use tracing::{error, info, warn};

use crate::config::settings::{DashboardSettings, StatisticsConfig, SubmissionConfig, ViewConfig};
use crate::{TriageError, TriageResult};

/// Collects configuration warnings and errors before a session starts
pub struct ConfigurationValidator {
    /// Whether to perform strict validation (fails on warnings)
    strict_mode: bool,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl ConfigurationValidator {
    pub fn new(strict_mode: bool) -> Self {
        Self {
            strict_mode,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Validate complete configuration
    pub fn validate_settings(&mut self, settings: &DashboardSettings) -> TriageResult<()> {
        info!("Starting configuration validation");

        self.validate_view_config(&settings.dashboard);
        self.validate_submission_config(&settings.submission);
        self.validate_statistics_config(&settings.statistics);

        self.print_validation_summary();

        if !self.errors.is_empty() {
            return Err(TriageError::configuration(format!(
                "validation failed with {} errors",
                self.errors.len()
            )));
        }

        if self.strict_mode && !self.warnings.is_empty() {
            return Err(TriageError::configuration(format!(
                "validation failed in strict mode with {} warnings",
                self.warnings.len()
            )));
        }

        info!("Configuration validation passed");
        Ok(())
    }

    fn validate_view_config(&mut self, view: &ViewConfig) {
        if view.page_size == 0 {
            self.errors.push("page_size must be greater than 0".to_string());
        } else if view.page_size > 100 {
            self.warnings.push(format!(
                "page_size is very large ({}). Cards will be hard to scan",
                view.page_size
            ));
        }

        match view.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                self.warnings.push(format!(
                    "Non-standard log level: {}. Recommended: trace, debug, info, warn, error",
                    other
                ));
            }
        }

        if view.reset_page_on_query_change {
            info!("Page number resets to 1 on every filter, search or sort change");
        }
    }

    fn validate_submission_config(&mut self, submission: &SubmissionConfig) {
        if submission.latency_ms > 10_000 {
            self.warnings.push(format!(
                "Submission latency is very long ({}ms). The form stays busy for that long",
                submission.latency_ms
            ));
        }
    }

    fn validate_statistics_config(&mut self, statistics: &StatisticsConfig) {
        if statistics.recent_window_days == 0 {
            self.errors.push("recent_window_days must be greater than 0".to_string());
        } else if statistics.recent_window_days > 365 {
            self.warnings.push(format!(
                "recent_window_days is {} days. \"Recent\" will cover most incidents",
                statistics.recent_window_days
            ));
        }
    }

    fn print_validation_summary(&self) {
        for (i, warning) in self.warnings.iter().enumerate() {
            warn!("  {}: {}", i + 1, warning);
        }

        for (i, error) in self.errors.iter().enumerate() {
            error!("  {}: {}", i + 1, error);
        }

        info!(
            "Configuration validation completed with {} warnings and {} errors",
            self.warnings.len(),
            self.errors.len()
        );
    }

    /// Get validation warnings
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get validation errors
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
