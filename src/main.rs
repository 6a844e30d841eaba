//! Triage - AI safety incident dashboard.

use anyhow::Result;
use triage::cli::{load_settings, Cli};
use triage::config::init_logging;
use triage::TriageError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| load_settings(cli.config.clone()).ok().map(|s| s.dashboard.log_level));
    init_logging(log_level.as_deref())?;

    if let Err(err) = cli.run().await {
        if let Some(triage_err) = err.downcast_ref::<TriageError>() {
            eprintln!("✗ {}", triage_err.user_message());
            std::process::exit(triage_err.exit_code());
        }
        return Err(err);
    }

    Ok(())
}
