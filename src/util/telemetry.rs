//! Telemetry helpers for structured logging.

/// Initialize tracing for the scheduler. Embedding applications usually
/// install their own subscriber; this installs an env-filtered default only
/// when none is set yet.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
