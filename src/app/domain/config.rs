use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::app::infrastructure::error::AppError;

/// Prefix shared by every environment variable the app reads.
pub const ENV_PREFIX: &str = "CRAFTFOLIO";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted records
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("craftfolio");
    path
}

fn default_log() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log: default_log(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn load() -> Result<Self, AppError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    /// Build configuration from `CRAFTFOLIO_*` pairs instead of the process
    /// environment. `CRAFTFOLIO_DATA_DIR` maps to `data_dir`.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::from_env(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    /// Unrelated and empty variables are ignored.
    fn from_env(env: Environment) -> Result<Self, AppError> {
        let conf = Config::builder()
            .add_source(env.ignore_empty(true))
            .build()?;
        Ok(conf.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log, "info");
        assert!(config.data_dir.ends_with("craftfolio"));
    }

    #[test]
    fn test_reads_prefixed_vars() {
        let config = AppConfig::from_vars([
            ("CRAFTFOLIO_DATA_DIR", "/tmp/resumes"),
            ("CRAFTFOLIO_LOG", "debug"),
            ("HOME", "/root"),
        ])
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/resumes"));
        assert_eq!(config.log, "debug");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = AppConfig::from_vars([("CRAFTFOLIO_LOG", "")]).unwrap();
        assert_eq!(config.log, "info");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let config = AppConfig::from_vars([("CRAFTFOLIO_THEME", "dark")]).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
