//! Tracing setup
//!
//! Logs go to stderr so report output on stdout can be piped or redirected.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default directive when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "famfin=warn";

/// Initialize the global subscriber once; `verbose` raises famfin to debug
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(verbose);
        // Another subscriber may already be installed by an embedding app
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

fn build_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("famfin=debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
    }
}
