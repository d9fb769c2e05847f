use crate::error::{CatalogError, CatalogErrorExt};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use tracing::level_filters::LevelFilter;

/// Output encoding for every command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` and `filter` are unset.
    pub level: String,
    /// Explicit filter directives, e.g. `elemental=debug`.
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, CatalogError> {
        self.level.parse().map_err(|_| CatalogError::InvalidConfiguration {
            message: format!("unknown log level '{}'", self.level).into(),
            context: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub log: LogConfig,
    pub output: OutputFormat,
    /// List members by position instead of ordinal.
    pub sorted: bool,
}

/// Loads the catalog configuration.
///
/// Settings are layered: built-in defaults, then the optional file at `path` (any format the
/// `config` crate recognizes by extension), then `ELEMENTAL__*` environment variables, where a
/// double underscore separates nesting levels (`ELEMENTAL__LOG__LEVEL=debug`).
///
/// # Errors
/// Fails when the file is given but unreadable, or when a value has the wrong shape.
pub fn load_config(path: Option<&Path>) -> Result<CatalogConfig, CatalogError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }
    builder = builder.add_source(Environment::with_prefix("ELEMENTAL").separator("__"));

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<CatalogConfig>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
