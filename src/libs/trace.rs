use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for debug mode. Messages emitted via
/// the `msg_*!` macros route through tracing once this has run.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
