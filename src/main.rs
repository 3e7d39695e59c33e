use anyhow::{bail, Result};
use online_travel_landing::{config::Config, i18n::TableValidator, server};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("online_travel_landing=info".parse()?),
        )
        .init();

    info!("Starting online travel landing page");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("Default language: {}", config.default_language.label());

    // Check the translation tables before serving anything
    let report = TableValidator::validate_all();
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            error!("{}", error);
        }
        bail!(
            "Translation tables failed validation with {} error(s)",
            report.errors.len()
        );
    }
    if report.is_clean() {
        info!("✓ Translation tables validated");
    } else if report.has_warnings() {
        info!(
            "✓ Translation tables validated ({} language(s) fall back to English)",
            report.warnings.len()
        );
    }

    server::serve(&config).await
}
