use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "dishbook_server=info,tower_http=info";

/// Install the global subscriber. `RUST_LOG` wins over `fallback`, which wins
/// over the built-in default.
pub fn init_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        eprintln!("Tracing subscriber not installed: {e}");
    }
}
