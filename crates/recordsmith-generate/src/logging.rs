use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;
use crate::errors::GenerationError;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Fails if a
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), GenerationError> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_directives.as_deref(), &config.filter)?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_timer(UtcTime::rfc_3339()),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_timer(UtcTime::rfc_3339()))
            .try_init()
    };

    result.map_err(|err| GenerationError::Logging(err.to_string()))
}

// An unparsable environment filter falls back to the configured one.
fn build_filter(
    env_directives: Option<&str>,
    configured: &str,
) -> Result<EnvFilter, GenerationError> {
    if let Some(filter) = env_directives.and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return Ok(filter);
    }
    EnvFilter::try_new(configured).map_err(|err| GenerationError::Logging(err.to_string()))
}
