//! Diagnostic logging to stderr.
//!
//! stdout carries the report, so every log line goes to stderr.
//! Quiet (`warn`) by default. `RUST_LOG` takes precedence; setting
//! `REVCALC_DEBUG` to any value forces `debug`.

use once_cell::sync::Lazy;
use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Global debug mode flag, read once at startup
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("REVCALC_DEBUG").is_ok());

const DEFAULT_LEVEL: &str = "warn";

static INIT: Once = Once::new();

/// Filter directive used when `RUST_LOG` is absent
fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        DEFAULT_LEVEL
    }
}

/// Initialize the stderr subscriber. Only the first call takes effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = if *DEBUG_MODE {
            EnvFilter::new(default_directive(true))
        } else {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(filter);

        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
