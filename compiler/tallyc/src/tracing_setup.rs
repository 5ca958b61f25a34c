use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Only does anything when `TALLY_LOG` (or, failing that, `RUST_LOG`) is
/// set, e.g. `TALLY_LOG=tally_eval=trace`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if let Ok(directives) = std::env::var("TALLY_LOG") {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
