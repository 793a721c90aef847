use crate::error::{RosterError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SALARY_PRECISION: usize = 2;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";

/// Display preferences for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Prefix for salary amounts in tables (e.g. "$", "€")
    #[serde(default)]
    pub currency_symbol: String,

    /// Digits after the decimal point when showing salaries
    #[serde(default = "default_salary_precision")]
    pub salary_precision: usize,

    /// Colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_salary_precision() -> usize {
    DEFAULT_SALARY_PRECISION
}

fn default_color() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            currency_symbol: String::new(),
            salary_precision: DEFAULT_SALARY_PRECISION,
            color: default_color(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Formats a salary with the configured symbol and precision.
    pub fn format_salary(&self, amount: f64) -> String {
        format!(
            "{}{:.*}",
            self.currency_symbol, self.salary_precision, amount
        )
    }
}

/// Picks the config directory: explicit flag, then `ROSTER_CONFIG_DIR`, then the
/// platform config dir. `None` when none of these can be determined.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
        .or_else(|| {
            directories::ProjectDirs::from("com", "roster", "roster")
                .map(|dirs| dirs.config_dir().to_path_buf())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.currency_symbol, "");
        assert_eq!(config.salary_precision, 2);
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = RosterConfig::load(temp.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "currency_symbol": "$", "salary_precision": 0, "color": false }"#,
        )
        .unwrap();

        let loaded = RosterConfig::load(temp.path()).unwrap();
        assert_eq!(
            loaded,
            RosterConfig {
                currency_symbol: "$".to_string(),
                salary_precision: 0,
                color: false,
            }
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "currency_symbol": "€" }"#,
        )
        .unwrap();

        let loaded = RosterConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.salary_precision, 2);
        assert!(loaded.color);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(matches!(
            RosterConfig::load(temp.path()),
            Err(RosterError::Serialization(_))
        ));
    }

    #[test]
    fn test_format_salary() {
        let mut config = RosterConfig::default();
        assert_eq!(config.format_salary(50000.0), "50000.00");

        config.currency_symbol = "$".into();
        config.salary_precision = 0;
        assert_eq!(config.format_salary(1234.6), "$1235");
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = PathBuf::from("/tmp/roster-explicit");
        assert_eq!(resolve_config_dir(Some(dir.clone())), Some(dir));
    }
}
