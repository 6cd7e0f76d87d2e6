//! Logging setup
//!
//! Installs a `tracing` subscriber that writes to stderr. `--log-level`
//! wins over `RUST_LOG`, which wins over the `--verbose` default.

use tracing_subscriber::EnvFilter;

/// Map the level names accepted on the command line onto `tracing` levels
pub fn normalize_level(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "verbose" | "debug" => "debug",
        "warning" | "warn" => "warn",
        "error" | "critical" => "error",
        _ => "info",
    }
}

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    if let Some(level) = level {
        return EnvFilter::new(normalize_level(level));
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

/// Initialize the global subscriber
pub fn init(verbose: bool, json: bool, level: Option<&str>) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, level))
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}
