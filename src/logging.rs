//! Logging setup
//!
//! Library code logs through `tracing`; the binary installs a subscriber
//! that writes to stderr. `KPI_LOG` takes an `EnvFilter` directive such as
//! `debug` or `kpi_calc=trace`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "KPI_LOG";

/// Filter used when `KPI_LOG` is unset
pub fn default_filter(verbose: bool, interactive: bool) -> &'static str {
    if interactive {
        // Log lines on stderr would tear the TUI frame
        "off"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool, interactive: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, interactive)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false, false), "warn");
        assert_eq!(default_filter(true, false), "debug");
        assert_eq!(default_filter(true, true), "off");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(false, false);
        init_logging(true, false);
    }
}
