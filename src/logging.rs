//! Tracing setup for the binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` is honored; on top of it, `smartbudget` logs at `info`, or
/// `debug` when `verbose` is set. Calling this more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let directive = if verbose {
            "smartbudget=debug"
        } else {
            "smartbudget=info"
        };

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
