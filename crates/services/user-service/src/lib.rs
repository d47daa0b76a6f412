//! User Service Library
//!
//! CRUD HTTP API for user records with an age derived from the date of
//! birth at read time. The crate owns the storage (SeaORM), the service
//! logic and the HTTP surface (Axum).

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};

use domain::{Clock, SystemClock};

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Wire repository and service on top of an open database.
pub fn build_state(database: Database, clock: Arc<dyn Clock>) -> AppState {
    let user_repo = Arc::new(UserStore::new(database.get_connection()));
    let user_service = Arc::new(UserManager::new(user_repo, clock));

    AppState::new(user_service, database)
}

/// Connect to the database and serve HTTP until a shutdown signal arrives.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    // Create app state and router
    let state = build_state(db, Arc::new(SystemClock));
    let app = create_router(state, config.server.request_timeout);

    // Run server
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("User service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("User service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
