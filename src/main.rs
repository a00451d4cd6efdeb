//! caseshift - launcher script filter
//!
//! Prints every casing of the query, or of the clipboard when the query is
//! empty, as launcher items on stdout.

use anyhow::Result;
use caseshift::clipboard;
use caseshift::config::Config;
use caseshift::output;
use caseshift::workflow;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Setup logging; stdout belongs to the launcher document
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("caseshift v{} starting", env!("CARGO_PKG_VERSION"));

    let reader = clipboard::create_reader(config.clipboard_fallback());
    let formats = config.selected_formats();
    let records =
        workflow::run_with_formats(&config.query(), reader.as_ref(), &formats).await?;

    if records.is_empty() {
        info!("Nothing to convert");
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut sink = output::create_sink(config.output, stdout.lock());
    sink.present(&records)?;

    Ok(())
}
