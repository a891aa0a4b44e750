//! Booking Portal
//!
//! Serves the portal (server feature) or boots it in the browser (web feature).

use booking_portal::{app::App, config};

#[cfg(feature = "server")]
fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_portal=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting Booking Portal v{} ({})",
        env!("PORTAL_VERSION"),
        env!("PORTAL_GIT_SHA")
    );

    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, demo mode: {}, default locale: {}",
        config.demo_mode,
        config.default_locale
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::LaunchBuilder::new()
        .with_context(config::ShellConfig::default())
        .launch(App);
}
