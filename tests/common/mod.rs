use tracing_subscriber::EnvFilter;

/// Installs error reporting and a `RUST_LOG` driven subscriber once per test
/// binary. Later calls are no-ops.
pub fn init() {
    let _ = color_eyre::install();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
