//! Check a set of credentials against the users in a fixture file.

use std::path::PathBuf;
use std::process::ExitCode;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use jungle_storefront::AuthService;

use crate::config::CliConfig;

/// Load the fixtures, then authenticate `email` / `password`.
///
/// Exits with failure when the credentials do not match a user.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the lookup fails.
pub fn run(
    file: Option<PathBuf>,
    email: &str,
    password: &SecretString,
    config: &CliConfig,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let path = super::fixture_path(file, config)?;
    let (store, _) = super::load(&path)?;

    let user = AuthService::new(&store)
        .authenticate_with_credentials(email, password.expose_secret())?;

    match user {
        Some(user) => {
            info!(user_id = ?user.id(), "Logged in as {}", user.full_name());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            warn!("Invalid email or password");
            Ok(ExitCode::FAILURE)
        }
    }
}
