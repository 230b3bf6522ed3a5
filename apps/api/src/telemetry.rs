use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "trivia_api=info,tower_http=info";

/// Install the global tracing subscriber
///
/// The filter is taken from `RUST_LOG` when set.
pub fn init_tracing() {
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer())
        .init();
}
