use serde::{Deserialize, Serialize};

use crate::error::TvScoutError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub missing_image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result count used when the form leaves it empty or invalid.
    pub default_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `tvscout_api=debug`.
    pub level: String,
}

impl AppConfig {
    /// Load config: `overrides` (a partial TOML document, if any) merged
    /// table-by-table over the built-in defaults.
    pub fn load(overrides: Option<&str>) -> Result<Self, TvScoutError> {
        let mut merged: toml::Table =
            toml::from_str(DEFAULT_CONFIG).map_err(|e| TvScoutError::Config(e.to_string()))?;

        if let Some(source) = overrides {
            let user: toml::Table =
                toml::from_str(source).map_err(|e| TvScoutError::Config(e.to_string()))?;
            merge_tables(&mut merged, user);
        }

        toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| TvScoutError::Config(e.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load(None).expect("built-in default config is valid TOML")
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(nested) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge_tables(existing, nested),
                _ => {
                    base.insert(key, toml::Value::Table(nested));
                }
            },
            other => {
                base.insert(key, other);
            }
        }
    }
}
