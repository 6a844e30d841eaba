use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::{ResultExt, TriageError, TriageResult};

/// Dashboard-wide configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub dashboard: ViewConfig,
    pub submission: SubmissionConfig,
    pub statistics: StatisticsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Incidents shown per page
    pub page_size: usize,
    /// Jump back to page 1 whenever severity, search, date range or sort changes
    pub reset_page_on_query_change: bool,
    /// Start each session from the bundled sample incidents
    pub seed_sample_data: bool,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Simulated round-trip before a submitted incident is stored
    pub latency_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Width of the "recent incidents" window
    pub recent_window_days: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 6,
            reset_page_on_query_change: false,
            seed_sample_data: true,
            log_level: "info".to_string(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self { latency_ms: 1000 }
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self { recent_window_days: 7 }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            dashboard: ViewConfig::default(),
            submission: SubmissionConfig::default(),
            statistics: StatisticsConfig::default(),
        }
    }
}

impl DashboardSettings {
    /// Load settings with precedence: environment > config file > defaults
    pub fn load() -> TriageResult<Self> {
        let path = Self::config_path();
        let path = path.exists().then_some(path);
        Self::load_from(path.as_deref())
    }

    /// Load settings from an explicit file (if any), then apply environment overrides
    pub fn load_from(path: Option<&Path>) -> TriageResult<Self> {
        let mut settings = match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                debug!("No configuration file, using defaults");
                Self::default()
            }
        };

        settings.apply_env_overrides()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> TriageResult<Self> {
        let content = std::fs::read_to_string(path).with_config_context(path)?;
        toml::from_str::<Self>(&content).with_config_context(path)
    }

    pub fn apply_env_overrides(&mut self) -> TriageResult<()> {
        if let Ok(val) = std::env::var("TRIAGE_LOG_LEVEL") {
            self.dashboard.log_level = val;
        }

        if let Ok(val) = std::env::var("TRIAGE_PAGE_SIZE") {
            self.dashboard.page_size = val.parse().map_err(|_| {
                TriageError::configuration(format!("TRIAGE_PAGE_SIZE is not a number: {}", val))
            })?;
        }

        if let Ok(val) = std::env::var("TRIAGE_SUBMIT_LATENCY_MS") {
            self.submission.latency_ms = val.parse().map_err(|_| {
                TriageError::configuration(format!(
                    "TRIAGE_SUBMIT_LATENCY_MS is not a number: {}",
                    val
                ))
            })?;
        }

        Ok(())
    }

    pub fn config_path() -> PathBuf {
        if let Ok(custom_path) = std::env::var("TRIAGE_CONFIG_PATH") {
            PathBuf::from(custom_path)
        } else {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("triage")
                .join("config.toml")
        }
    }

    pub fn validate(&self) -> TriageResult<()> {
        if self.dashboard.page_size == 0 {
            return Err(TriageError::configuration("page_size must be greater than 0"));
        }

        if self.statistics.recent_window_days == 0 {
            return Err(TriageError::configuration(
                "recent_window_days must be greater than 0",
            ));
        }

        Ok(())
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submission.latency_ms)
    }

    pub fn recent_window(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.statistics.recent_window_days))
    }
}
