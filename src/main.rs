//! Circdesk - Library Circulation Desk
//!
//! Terminal shell over the in-memory circulation desk. All state is
//! discarded when the process exits.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circdesk::{config::AppConfig, services::Desk, shell::Shell};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing; logs go to stderr so they do not interleave with
    // the menu on stdout
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("circdesk={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Circdesk v{}", env!("CARGO_PKG_VERSION"));

    let shell = Shell::new(Desk::new(), config.display.clone());
    shell.run();

    tracing::info!("Circdesk exiting, in-memory state discarded");
    Ok(())
}
