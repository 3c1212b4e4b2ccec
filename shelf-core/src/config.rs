use serde::Deserialize;
use tracing::debug;

use crate::{Error, dialect::DialectKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dialect: DialectKind,
}

impl Config {
    /// Parses a config from TOML. Missing keys fall back to their defaults.
    pub fn from_toml(source: &str) -> Result<Config, Error> {
        let config: Config = toml::from_str(source)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;

        debug!(dialect = ?config.dialect, "Loaded Config");
        Ok(config)
    }
}
