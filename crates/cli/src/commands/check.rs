//! Validate every record in a fixture file.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use crate::config::CliConfig;

/// Load the fixtures and report each record that fails validation.
///
/// Exits with failure if any record was rejected.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn run(file: Option<PathBuf>, config: &CliConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let path = super::fixture_path(file, config)?;
    let (_, report) = super::load(&path)?;

    info!("Fixture check complete");
    info!("  Categories saved: {}", report.categories);
    info!("  Products saved: {}", report.products);
    info!("  Users saved: {}", report.users);

    if report.is_clean() {
        return Ok(ExitCode::SUCCESS);
    }

    error!("  Rejected records: {}", report.rejected.len());
    for rejection in &report.rejected {
        error!("    - {}", rejection.record);
        for message in &rejection.messages {
            error!("        {message}");
        }
    }

    Ok(ExitCode::FAILURE)
}
