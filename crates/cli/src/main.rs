//! Jungle CLI - Fixture and credential checks.
//!
//! # Usage
//!
//! ```bash
//! # Validate every category, product and user in a fixture file
//! jungle check --file fixtures/seed.yaml
//!
//! # Authenticate against the users in a fixture file
//! jungle login -e johndoe@email.com -p password --file fixtures/seed.yaml
//! ```
//!
//! # Commands
//!
//! - `check` - Load fixtures and report records that fail validation
//! - `login` - Load fixtures and check a set of credentials

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod fixtures;

use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "jungle")]
#[command(author, version, about = "Jungle CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every record in a fixture file
    Check {
        /// Fixture file (defaults to `JUNGLE_FIXTURES`)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Check credentials against the users in a fixture file
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Fixture file (defaults to `JUNGLE_FIXTURES`)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_format);

    match run(cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check { file } => commands::check::run(file, config),
        Commands::Login {
            email,
            password,
            file,
        } => {
            let password = SecretString::from(password);
            commands::login::run(file, &email, &password, config)
        }
    }
}
