use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub parser: ParserConfig,
    pub logging: LoggingConfig,
}

/// Policy knobs for the iCalendar parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Accept several concatenated top-level components in one input.
    pub multi_document: bool,
    /// Skip content lines that fail to decode instead of aborting the parse.
    pub skip_invalid_lines: bool,
    /// Reject documents whose root component is not `VCALENDAR`.
    pub require_calendar_root: bool,
    /// Deepest allowed component nesting, the root counting as one.
    pub max_depth: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            multi_document: false,
            skip_invalid_lines: false,
            require_calendar_root: true,
            max_depth: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive string, e.g. `info` or `kunai_ical=trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        let parser = ParserConfig::default();
        let logging = LoggingConfig::default();
        Ok(Config::builder()
            .set_default("parser.multi_document", parser.multi_document)?
            .set_default("parser.skip_invalid_lines", parser.skip_invalid_lines)?
            .set_default("parser.require_calendar_root", parser.require_calendar_root)?
            .set_default("parser.max_depth", parser.max_depth)?
            .set_default("logging.level", logging.level)?)
    }

    /// ## Summary
    /// Loads configuration from `kunai.toml` and `KUNAI_*` environment variables.
    /// Environment variables take precedence over file values; nested keys use a
    /// double underscore (`KUNAI_PARSER__MULTI_DOCUMENT=true`).
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;
        tracing::debug!(?settings, "Configuration loaded");
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed or a value has the wrong type.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from the environment, reading a `.env` file first if present.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests;
