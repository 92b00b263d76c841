//! Tracing setup for embedding front ends

use tracing_subscriber::{
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Default filter when `RUST_LOG` is unset: info for this crate, warn for others
pub const DEFAULT_LOG_FILTER: &str = "crop_advisor=info,warn";

/// `RUST_LOG` if set and valid, otherwise `default_filter`
pub fn log_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install a global fmt subscriber honouring `RUST_LOG`.
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    install(default_filter, tracing_subscriber::fmt::layer())
}

fn install<L>(default_filter: &str, output: L) -> bool
where
    L: Layer<Layered<EnvFilter, Registry>> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(log_filter(default_filter))
        .with(output)
        .try_init()
        .is_ok()
}
