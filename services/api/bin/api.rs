//! Main Entrypoint for the Study Buddy Skill Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Building the content store and handler list, failing fast on bad content.
//! 3. Constructing the Axum router.
//! 4. Starting the web server and handling graceful shutdown.

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use study_buddy_api::{config::Config, router::create_router, state::AppState};
use study_buddy_core::{
    Skill,
    random::{RandomSource, SeededRandom, ThreadRandom},
};
use tracing::info;

/// Listens for the `Ctrl+C` signal to gracefully shut down the server.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    info!("Received shutdown signal. Shutting down gracefully...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    info!("Configuration loaded. Initializing skill...");

    // --- 3. Build the Skill ---
    let random: Arc<dyn RandomSource> = match config.random_seed {
        Some(seed) => {
            info!(seed, "Using seeded random source.");
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };
    let skill = Skill::new(random).context("Failed to load study content")?;
    info!(
        handlers = ?skill.dispatcher().handler_names(),
        "Skill content loaded."
    );

    let app_state = Arc::new(AppState::new(skill, &config));

    // --- 4. Create Router ---
    let app = create_router(app_state);

    // --- 5. Start Server ---
    info!(
        bind_address = %config.bind_address,
        skill_id = ?config.skill_id,
        tolerance_secs = config.timestamp_tolerance_secs,
        "Service configured. Starting server..."
    );
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server has shut down.");
    Ok(())
}
