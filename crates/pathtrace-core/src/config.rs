//! Configuration for pathtrace
//!
//! Resolved in order: an explicit `--config` path, the `PATHTRACE_CONFIG`
//! environment variable, then `<config_dir>/pathtrace/config.toml`.
//! A missing default file yields the default configuration.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PathtraceError, Result};
use crate::format::OutputFormat;
use crate::search::Algorithm;

pub use types::{Config, OutputConfig, SearchConfig};

const CONFIG_DIR: &str = "pathtrace";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_ENV_VAR: &str = "PATHTRACE_CONFIG";

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathtraceError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;

        // An unknown algorithm name is a config error, not a run-time one
        config.default_algorithm()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathtraceError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Locate and load the active configuration.
    ///
    /// An explicitly named file must exist; the per-user default is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&env_path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// The configured default algorithm, if any
    pub fn default_algorithm(&self) -> Result<Option<Algorithm>> {
        match self.search.default_algorithm.as_deref() {
            None => Ok(None),
            Some(name) => Algorithm::from_name(name)
                .map(Some)
                .ok_or_else(|| PathtraceError::invalid_value("search.default_algorithm", name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.search.default_algorithm.is_none());
        assert!(config.output.format.is_none());
        assert!(!config.output.pseudocode);
        assert_eq!(config.default_algorithm().unwrap(), None);
    }

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            search: SearchConfig {
                default_algorithm: Some("Dijkstra".to_string()),
            },
            output: OutputConfig {
                format: Some(OutputFormat::Records),
                pseudocode: true,
            },
        };
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.default_algorithm().unwrap(),
            Some(Algorithm::Dijkstra)
        );
    }

    #[test]
    fn test_output_format_precedence() {
        let mut config = Config::default();
        assert_eq!(config.output_format(None), OutputFormat::Human);

        config.output.format = Some(OutputFormat::Json);
        assert_eq!(config.output_format(None), OutputFormat::Json);
        assert_eq!(
            config.output_format(Some(OutputFormat::Records)),
            OutputFormat::Records
        );
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.output.format, Some(OutputFormat::Json));
        assert!(loaded.search.default_algorithm.is_none());
    }

    #[test]
    fn test_load_rejects_unknown_algorithm() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\ndefault_algorithm = \"A*\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, PathtraceError::InvalidValue { .. }));
    }

    #[test]
    fn test_discover_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Config::discover(Some(&path)).is_err());
    }
}
