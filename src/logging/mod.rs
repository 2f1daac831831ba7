mod filters;

pub use filters::build_filter;
use tracing_subscriber::fmt;

/// Initialises the global `tracing` subscriber.
///
/// Behaviour:
/// - `quiet` -> logging is switched off entirely;
/// - `verbose` -> `debug`;
/// - otherwise `RUST_LOG` when set, else `default_directive`.
///
/// Logs go to stderr so that stdout carries only command replies.
pub fn init_logging(
    verbose: bool,
    quiet: bool,
    default_directive: &str,
) -> anyhow::Result<()> {
    let filter = if quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        build_filter(default_directive)
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_level(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;

    Ok(())
}
