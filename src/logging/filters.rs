use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` wins when it is set and valid, otherwise
/// `default_directive` is used, and `warn` is the last resort.
pub fn build_filter(default_directive: &str) -> EnvFilter {
    if let Ok(env_filter) = EnvFilter::try_from_default_env() {
        return env_filter;
    }

    match EnvFilter::try_new(default_directive) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!(
                "Invalid log filter directive '{default_directive}': {e}; falling back to 'warn'"
            );
            EnvFilter::new("warn")
        }
    }
}
