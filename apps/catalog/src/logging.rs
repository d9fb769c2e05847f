use crate::config::LogConfig;
use crate::error::CatalogError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber. Logs go to stderr so command output stays parseable.
///
/// # Errors
/// Returns [`CatalogError::InvalidConfiguration`] for a bad level or filter and
/// [`CatalogError::Subscriber`] if a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), CatalogError> {
    let env_filter = build_env_filter(config)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer().compact().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

fn build_env_filter(config: &LogConfig) -> Result<EnvFilter, CatalogError> {
    let builder = EnvFilter::builder().with_default_directive(config.level_filter()?.into());
    config.filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| CatalogError::InvalidConfiguration {
                message: format!("Invalid log filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
