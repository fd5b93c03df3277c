//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output. The filter comes
//! from `POKERHAND_LOG` (same syntax as `RUST_LOG`) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "POKERHAND_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `directive`, falling back to the default on a
/// missing or malformed directive.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging for the application. Later calls are no-ops.
pub fn init_logging() {
    let directive = std::env::var(LOG_ENV).ok();
    let filter = build_filter(directive.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_filter() {
        assert!(build_filter(None).to_string().contains("warn"));
        let fallback = build_filter(Some("pokerhand_engine=loud")).to_string();
        assert!(fallback.contains("warn"));
        assert!(!fallback.contains("pokerhand_engine"));
    }

    #[test]
    fn accepts_custom_directive() {
        let filter = build_filter(Some("pokerhand_engine=debug"));
        assert!(filter.to_string().contains("pokerhand_engine=debug"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging();
        init_logging();
    }
}
