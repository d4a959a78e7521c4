//! # ATM Configuration
//!
//! Loads the machine's inventory and display settings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CASHPOINT_CURRENCY_SYMBOL=₽                                        │
//! │     CASHPOINT_MINOR_UNITS=2                                            │
//! │     CASHPOINT_MAX_ATTEMPTS=5                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else $CASHPOINT_CONFIG, else                      │
//! │     ~/.config/cashpoint/atm.toml (Linux)                               │
//! │     ~/Library/Application Support/com.cashpoint.atm/atm.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Demo machine: 5000×40, 1000×40, 200×40 (reserve 2), 100×40         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! currency_symbol = "₽"
//! minor_units = 2
//! max_attempts = 5
//!
//! [[inventory]]
//! value = 5000
//! count = 40
//!
//! [[inventory]]
//! value = 200
//! count = 40
//! reserve = 2
//! ```

use std::path::{Path, PathBuf};

use cashpoint_core::validation::validate_inventory;
use cashpoint_core::{Denomination, Inventory, ValidationError, DEFAULT_MAX_PROMPT_ATTEMPTS};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CASHPOINT_CONFIG";

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid inventory: {0}")]
    InvalidInventory(#[from] ValidationError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// ATM Configuration
// =============================================================================

/// Complete terminal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmConfig {
    /// Symbol printed in front of amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Decimal places of the currency (2 for RUB/USD, 0 for JPY).
    #[serde(default = "default_minor_units")]
    pub minor_units: u8,

    /// Amount entries allowed before the session gives up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Notes loaded in the machine.
    #[serde(default = "default_inventory")]
    pub inventory: Inventory,
}

fn default_currency_symbol() -> String {
    "₽".to_string()
}

fn default_minor_units() -> u8 {
    2
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_PROMPT_ATTEMPTS
}

fn default_inventory() -> Inventory {
    Inventory::new(vec![
        Denomination::new(5000, 40),
        Denomination::new(1000, 40),
        Denomination::new(200, 40).with_reserve(2),
        Denomination::new(100, 40),
    ])
}

impl Default for AtmConfig {
    fn default() -> Self {
        AtmConfig {
            currency_symbol: default_currency_symbol(),
            minor_units: default_minor_units(),
            max_attempts: default_max_attempts(),
            inventory: default_inventory(),
        }
    }
}

impl AtmConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicitly named file (argument or `CASHPOINT_CONFIG`) must exist.
    /// The platform default file is optional.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let explicit = config_path.or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                other => {
                    debug!(path = ?other, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading ATM config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Platform-specific default config location.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "cashpoint", "atm").map(|dirs| dirs.config_dir().join("atm.toml"))
    }

    /// Applies `CASHPOINT_*` environment overrides.
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("CASHPOINT_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(value) = lookup("CASHPOINT_MINOR_UNITS") {
            self.minor_units = parse_override("CASHPOINT_MINOR_UNITS", &value)?;
        }

        if let Some(value) = lookup("CASHPOINT_MAX_ATTEMPTS") {
            self.max_attempts = parse_override("CASHPOINT_MAX_ATTEMPTS", &value)?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_inventory(&self.inventory)?;

        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_attempts".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cashpoint_core::Money;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_is_demo_machine() {
        let config = AtmConfig::default();
        assert_eq!(config.inventory.len(), 4);
        assert_eq!(config.inventory.max_dispensable(), Money::from_minor(251_600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let file = write_config(
            r#"
currency_symbol = "$"
minor_units = 2

[[inventory]]
value = 2000
count = 10

[[inventory]]
value = 500
count = 4
reserve = 1
"#,
        );

        let config = AtmConfig::from_file(file.path()).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.max_attempts, DEFAULT_MAX_PROMPT_ATTEMPTS);
        assert_eq!(
            config.inventory,
            Inventory::new(vec![
                Denomination::new(2000, 10),
                Denomination::new(500, 4).with_reserve(1),
            ])
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config("max_attempts = 3\n");
        let config = AtmConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.inventory, default_inventory());
    }

    #[test]
    fn test_parse_error_names_file() {
        let file = write_config("inventory = 12\n");
        let err = AtmConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = AtmConfig::load(Some(path.clone())).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_duplicate_denominations_rejected() {
        let file = write_config(
            r#"
[[inventory]]
value = 100
count = 1

[[inventory]]
value = 100
count = 2
"#,
        );
        let err = AtmConfig::load(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidInventory(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("CASHPOINT_CURRENCY_SYMBOL", "€"),
            ("CASHPOINT_MINOR_UNITS", "0"),
            ("CASHPOINT_MAX_ATTEMPTS", " 9 "),
        ]
        .into_iter()
        .collect();

        let mut config = AtmConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.minor_units, 0);
        assert_eq!(config.max_attempts, 9);
    }

    #[test]
    fn test_bad_override() {
        let mut config = AtmConfig::default();
        let err = config
            .apply_overrides(|key| (key == "CASHPOINT_MINOR_UNITS").then(|| "two".to_string()))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for CASHPOINT_MINOR_UNITS: 'two'"
        );
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = AtmConfig {
            max_attempts: 0,
            ..AtmConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
