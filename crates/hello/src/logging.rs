//! Diagnostics logging
//!
//! Diagnostics go to stderr so stdout carries nothing but the report.

use tracing_subscriber::EnvFilter;

/// Filter used when --verbose is given; overrides RUST_LOG
pub const VERBOSE_FILTER: &str = "hello=debug";

/// Filter used when RUST_LOG is unset
pub const DEFAULT_FILTER: &str = "warn";

pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        tracing::debug!("still alive");
    }
}
