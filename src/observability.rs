//! Logging setup.
//!
//! Everything goes to stderr; stdout carries only the chart.

use tracing_subscriber::filter::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

/// Priority: quiet flag > verbose flag > RUST_LOG env > `warn`
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    if verbose > 0 {
        let level = match verbose {
            1 => "debug",
            _ => "trace",
        };
        return EnvFilter::new(level);
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs the stderr subscriber. A second call is a no-op.
pub fn init_logging(quiet: bool, verbose: u8) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(quiet, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if result.is_ok() {
        tracing::debug!("logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(env_filter(true, 2).to_string(), "error");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(env_filter(false, 1).to_string(), "debug");
        assert_eq!(env_filter(false, 3).to_string(), "trace");
    }
}
