use std::{fmt, path::PathBuf};

use shuttle_runtime::SecretStore;
use tracing::warn;

const DEFAULT_APP_NAME: &str = "Registration";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingValue(&'static str),
    BlankValue(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::MissingValue(key) => write!(f, "Secret {} is not set", key),
            ConfigError::BlankValue(key) => write!(f, "Secret {} is blank", key),
        }
    }
}

/// App configuration
/// Built from the secrets given to the runtime, falling back to defaults
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub app_name: String,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let app_name = read_secret(&lookup, "APP_NAME").unwrap_or_else(|error| {
            warn!("{}, using '{}'", error, DEFAULT_APP_NAME);
            DEFAULT_APP_NAME.to_owned()
        });

        let static_dir = read_secret(&lookup, "STATIC_DIR").unwrap_or_else(|error| {
            warn!("{}, using '{}'", error, DEFAULT_STATIC_DIR);
            DEFAULT_STATIC_DIR.to_owned()
        });

        Self {
            app_name,
            static_dir: PathBuf::from(static_dir),
        }
    }
}

fn read_secret(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    let value = lookup(key).ok_or(ConfigError::MissingValue(key))?;

    if value.trim().is_empty() {
        return Err(ConfigError::BlankValue(key));
    }

    Ok(value)
}
