use std::num::NonZeroUsize;

use serde::Deserialize;

use config::{Config, ConfigError, Environment};
use tracing_subscriber::EnvFilter;

use crate::database::DEFAULT_BUCKETS;

/// Runtime settings of the `chainkv` binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Number of buckets of the store. Fixed for the lifetime of a run.
    pub buckets: usize,
    /// Default log filter directive when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            // Adding default values
            .set_default("buckets", DEFAULT_BUCKETS as u64)?
            .set_default("log_level", "warn")?
            // Add environment variables with the CHAINKV_ prefix
            .add_source(Environment::with_prefix("CHAINKV"))
            .build()?;

        // Deserialize the configuration into our structure.
        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buckets == 0 {
            return Err(ConfigError::Message(
                "buckets must be greater than zero".to_string(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.log_level) {
            return Err(ConfigError::Message(format!(
                "log_level '{}' is not a valid filter directive: {e}",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Bucket count as a validated non-zero value.
    pub fn bucket_count(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.buckets)
            .ok_or_else(|| ConfigError::Message("buckets must be greater than zero".to_string()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
            log_level: "warn".to_string(),
        }
    }
}
