//! Logging infrastructure for the chunkwright CLI.
//!
//! Library crates only emit `tracing` events; this module installs the
//! subscriber. Logs are written to stderr so stdout stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str =
    "chunkwright_cli=debug,chunkwright_config=debug,chunkwright_chunks=debug";
const DEFAULT_FILTER: &str =
    "chunkwright_cli=info,chunkwright_config=info,chunkwright_chunks=info";
const QUIET_FILTER: &str =
    "chunkwright_cli=error,chunkwright_config=error,chunkwright_chunks=error";

/// Initialize the tracing subscriber with the specified options.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for chunkwright crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: Custom filter
/// 4. Default: INFO for chunkwright crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    init_logger_with_filter(filter, no_color || !should_use_colors());
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second initialization (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Check if colored output should be enabled.
///
/// - `NO_COLOR`: If set, disables colors
/// - `FORCE_COLOR`: If set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_parse() {
        for directive in [VERBOSE_FILTER, DEFAULT_FILTER, QUIET_FILTER] {
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger_with_filter(EnvFilter::new(QUIET_FILTER), true);
        init_logger_with_filter(EnvFilter::new(QUIET_FILTER), true);
    }
}
