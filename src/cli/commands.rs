//! CLI command implementations.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::validation::ConfigurationValidator;
use crate::config::DashboardSettings;
use crate::dashboard::{Dashboard, DashboardEvent};
use crate::models::{IncidentDraft, Severity};
use crate::stats::StatKind;

use super::utils::{load_settings, parse_date_range, print_page, print_stats};
use super::ListArgs;

/// List the requested page of incidents
pub async fn list(config_path: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let settings = load_settings(config_path)?;
    let date_range = parse_date_range(args.from.as_deref(), args.to.as_deref())?;
    let dashboard = Dashboard::new(settings);

    dashboard.dispatch(DashboardEvent::SeverityChanged(args.severity)).await?;
    dashboard
        .dispatch(DashboardEvent::SearchChanged(args.search.unwrap_or_default()))
        .await?;
    dashboard.dispatch(DashboardEvent::DateRangeChanged(date_range)).await?;
    dashboard.dispatch(DashboardEvent::SortChanged(args.sort)).await?;

    let view = dashboard.dispatch(DashboardEvent::PageRequested(args.page)).await?;
    if view.page != args.page {
        warn!("Page {} is out of range, showing page {}", args.page, view.page);
    }

    if let Some(id) = args.expand {
        dashboard.dispatch(DashboardEvent::DetailsToggled(id)).await?;
    }

    let page = dashboard.visible_page().await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page(&page);
    }

    Ok(())
}

/// Show whole-store statistics, optionally charting one card
pub async fn stats(config_path: Option<PathBuf>, chart: Option<StatKind>, json: bool) -> Result<()> {
    let settings = load_settings(config_path)?;
    let dashboard = Dashboard::new(settings);

    if let Some(kind) = chart {
        dashboard.dispatch(DashboardEvent::StatToggled(kind)).await?;
    }

    let stats = dashboard.statistics().await?;
    let series = dashboard.selected_chart().await?;

    if json {
        let output = serde_json::json!({
            "stats": stats,
            "chart": series,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_stats(&stats, series.as_deref());
    }

    Ok(())
}

/// Submit one incident through the full workflow, including the simulated latency
pub async fn report(
    config_path: Option<PathBuf>,
    title: String,
    description: String,
    severity: Severity,
    json: bool,
) -> Result<()> {
    let settings = load_settings(config_path)?;
    let dashboard = Dashboard::new(settings);

    dashboard.dispatch(DashboardEvent::FormOpened).await?;

    if !json {
        println!("Submitting incident...");
    }
    let incident = dashboard
        .submit(IncidentDraft::new(title, description, severity))
        .await?;
    let stats = dashboard.statistics().await?;

    if json {
        let output = serde_json::json!({
            "incident": incident,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("✓ Reported {}", incident);
        println!();
        print_stats(&stats, None);
    }

    Ok(())
}

/// Initialize default configuration
pub async fn init(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(DashboardSettings::config_path);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let settings = DashboardSettings::default();
    let toml_content = toml::to_string_pretty(&settings)?;
    std::fs::write(&config_path, toml_content)?;

    info!("Wrote default configuration to {}", config_path.display());
    println!("✓ Configuration initialized at {:?}", config_path);
    Ok(())
}

/// Manage configuration (show, validate)
pub async fn config(config_path: Option<PathBuf>, show: bool, validate: bool, strict: bool) -> Result<()> {
    let settings = load_settings(config_path)?;

    if show {
        let toml_content = toml::to_string_pretty(&settings)?;
        println!("{}", toml_content);
    }

    if validate {
        let mut validator = ConfigurationValidator::new(strict);
        let outcome = validator.validate_settings(&settings);
        for warning in validator.warnings() {
            println!("! {}", warning);
        }
        outcome?;
        println!("✓ Configuration is valid");
    }

    Ok(())
}

/// Show version information
pub async fn version() -> Result<()> {
    println!("Triage {}", env!("CARGO_PKG_VERSION"));
    println!("Built with Rust {}", rustc_version::version()?);
    Ok(())
}
