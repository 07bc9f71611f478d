/// Initializes structured logging for the binary and tests.
///
/// Verbosity is controlled through `RUST_LOG`:
/// - `RUST_LOG=info` — order lifecycle events
/// - `RUST_LOG=mallsim=debug` — plus per-phase delivery updates
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
