use tracing_subscriber::EnvFilter;

/// Initialize the fmt tracing subscriber.
///
/// Filter comes from `RUST_LOG` when set, otherwise info level for our
/// crates and warn for everything else. `try_init` is used because the
/// Dioxus CLI may have already installed a subscriber in dev mode; in
/// that case this is a no-op.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,server=info,app=info,sqlx=warn"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    match result {
        Ok(()) => tracing::info!(version = env!("CARGO_PKG_VERSION"), "telemetry initialized"),
        Err(_) => eprintln!("[telemetry] subscriber already set, skipping init"),
    }
}
