//! Standard tracing subscriber setup for server binaries.

/// Initialize a tracing subscriber with env-based filtering.
///
/// Default directive: `wayfare=info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("wayfare=info".parse().unwrap_or_default());

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
