//! Server configuration read from the environment (and a `.env` file when
//! one is present).
//!
//! | Variable      | Default                 |
//! |---------------|-------------------------|
//! | `HOST`        | `127.0.0.1`             |
//! | `PORT`        | `3000`                  |
//! | `CORS_ORIGIN` | `http://localhost:3001` |
//! | `JSON_LIMIT`  | `1048576` (bytes)       |
//! | `SEED`        | `true`                  |

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use log::info;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// The one origin allowed to call the API from a browser.
    pub cors_origin: String,
    /// Maximum accepted JSON body size, in bytes.
    pub json_limit: usize,
    /// Start with the hardcoded catalogue instead of empty stores.
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: load(&lookup, "HOST", "127.0.0.1".to_string())?,
            port: load(&lookup, "PORT", 3000)?,
            cors_origin: load(&lookup, "CORS_ORIGIN", "http://localhost:3001".to_string())?,
            json_limit: load(&lookup, "JSON_LIMIT", 1024 * 1024)?,
            seed: load(&lookup, "SEED", true)?,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(
            config,
            Config {
                host: "127.0.0.1".to_string(),
                port: 3000,
                cors_origin: "http://localhost:3001".to_string(),
                json_limit: 1024 * 1024,
                seed: true,
            }
        );
        assert_eq!(config.url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[("PORT", " 8080 "), ("SEED", "false")]).unwrap();

        assert_eq!(config.port, 8080);
        assert!(!config.seed);
    }

    #[test]
    fn rejects_garbage() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }
}
