//! Subcommand implementations.

pub mod check;
pub mod login;

use std::path::{Path, PathBuf};

use tracing::info;

use jungle_storefront::MemoryStore;

use crate::config::CliConfig;
use crate::fixtures::{FixtureFile, LoadReport};

/// Resolve the fixture path from `--file` or `JUNGLE_FIXTURES`.
fn fixture_path(file: Option<PathBuf>, config: &CliConfig) -> Result<PathBuf, String> {
    file.or_else(|| config.fixtures.clone())
        .ok_or_else(|| "no fixture file given (use --file or set JUNGLE_FIXTURES)".to_owned())
}

/// Load a fixture file into a fresh store.
fn load(path: &Path) -> Result<(MemoryStore, LoadReport), Box<dyn std::error::Error>> {
    info!(path = %path.display(), "Loading fixtures");

    let mut store = MemoryStore::new();
    let report = FixtureFile::read(path)?.load_into(&mut store)?;

    Ok((store, report))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// The sample fixture file shipped with the workspace.
    pub fn seed_fixtures() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/seed.yaml")
    }

    /// Write `yaml` to a fixture file inside a fresh temp dir.
    pub fn write_fixtures(yaml: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fixtures.yaml");
        std::fs::write(&path, yaml).unwrap();
        (dir, path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_path_prefers_flag() {
        let config = CliConfig {
            fixtures: Some(PathBuf::from("from-env.yaml")),
            ..CliConfig::default()
        };

        let path = fixture_path(Some(PathBuf::from("from-flag.yaml")), &config).unwrap();
        assert_eq!(path, PathBuf::from("from-flag.yaml"));

        let path = fixture_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("from-env.yaml"));
    }

    #[test]
    fn test_fixture_path_missing() {
        assert!(fixture_path(None, &CliConfig::default()).is_err());
    }

    #[test]
    fn test_load_seed_fixtures() {
        let (store, report) = load(&test_support::seed_fixtures()).unwrap();
        assert!(report.is_clean());
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.product_count(), report.products);
    }
}
