//! FitQuest Backend
//!
//! An AI fitness and diet plan generator with gamified progress tracking.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Business logic and mutation sequencing
//! - Stores: In-memory state persisted as whole-value key-value snapshots
//! - Generation: plan generation against a local Ollama server

use anyhow::Result;
use fitquest_backend::generation::{DisabledPlanGenerator, OllamaPlanGenerator, PlanGenerator};
use fitquest_backend::storage::{FileStorage, StorageBackend};
use fitquest_backend::{config, routes, state::AppState, stores};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() {
            "production"
        } else {
            "development"
        },
        "Starting FitQuest Backend"
    );

    // Open durable storage and load persisted state
    let storage: Arc<dyn StorageBackend> = Arc::new(FileStorage::new(&config.storage.data_dir)?);
    let loaded = stores::load(storage.as_ref())?;
    if loaded.recovered {
        warn!("Persisted state was unreadable and has been reset");
        stores::persist(&loaded.data, storage.as_ref())?;
    }

    // Pick the plan generation provider
    let generator: Arc<dyn PlanGenerator> = if config.ai.enabled {
        info!(
            base_url = %config.ai.base_url,
            model = %config.ai.model,
            "Plan generation enabled"
        );
        Arc::new(OllamaPlanGenerator::from_config(&config.ai)?)
    } else {
        warn!("Plan generation disabled; generation requests will fail");
        Arc::new(DisabledPlanGenerator)
    };

    // Create application state
    let state = AppState::new(
        loaded.data,
        storage,
        generator,
        config.clone(),
        loaded.recovered,
    );

    // Build application
    let app = routes::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitquest_backend=info,tower_http=info".into()
        } else {
            "fitquest_backend=debug,tower_http=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
