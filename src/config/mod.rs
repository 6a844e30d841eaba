use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, fmt, EnvFilter};

pub mod settings;
pub mod validation;

pub use settings::DashboardSettings;

/// Initialize logging system with structured output and environment-based level filtering
///
/// `RUST_LOG` wins over `level`; `level` wins over the built-in default.
pub fn init_logging(level: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("triage={},tokio=warn", level)),
        None => EnvFilter::new("triage=info,tokio=warn"),
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_names(false)
                .with_file(true)
                .with_line_number(true)
                .with_level(true)
                .compact(),
        )
        .try_init()?;

    tracing::debug!("Structured logging initialized");
    Ok(())
}

/// Initialize logging for testing with reduced verbosity
pub fn init_test_logging() -> anyhow::Result<()> {
    let env_filter = EnvFilter::new("triage=debug");

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer().compact())
        .try_init()
        .or_else(|_| Ok(())) // Ignore if already initialized
}

/// Log structured events with consistent formatting
#[macro_export]
macro_rules! log_event {
    (session = $session_id:expr, $level:ident, $($field:tt)*) => {
        tracing::$level!(
            session_id = %$session_id,
            $($field)*
        );
    };
    (incident = $incident_id:expr, $level:ident, $($field:tt)*) => {
        tracing::$level!(
            incident_id = %$incident_id,
            $($field)*
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_logging_is_idempotent() {
        assert!(init_test_logging().is_ok());
        assert!(init_test_logging().is_ok());
    }
}
