use tracing_subscriber::EnvFilter;

/// Initializes tracing to stderr so stdout carries only generated code
/// lines. Default level is warn; RUST_LOG overrides.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .init();
}
