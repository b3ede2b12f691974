//! Helpers shared by the integration tests

/// Installs a tracing subscriber honouring `RUST_LOG`, once per test binary
#[allow(dead_code)]
pub fn init_tracing_for_test() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_test_writer()
        .try_init();
}
