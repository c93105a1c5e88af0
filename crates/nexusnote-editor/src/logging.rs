//! Tracing subscriber setup for hosts embedding the editor.
//!
//! The library itself only emits `tracing` events. Hosts that do not install
//! their own subscriber can call [`init_tracing`] once at startup.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` (e.g. `"info"` or `"nexusnote_editor=debug"`).
///
/// Returns an error if a global subscriber is already set; callers that may
/// run more than once (tests, plugin hosts) can ignore it.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        // Another test may have installed a subscriber first; either way the
        // second call in this test must fail without panicking.
        let _ = init_tracing("debug");
        assert!(init_tracing("debug").is_err());
    }
}
