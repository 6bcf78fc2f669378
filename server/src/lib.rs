//! HTTP service for a single in-memory todo list.
//!
//! # Overview
//! `TodoStore` holds the records and allocates ids; the handlers in
//! `routes` translate `/api` requests into store operations and map failures
//! to status codes through `ApiError`.
//!
//! # Design
//! - The store is built explicitly and injected through `AppState`; nothing
//!   lives in a global. Each replica of the process owns its own list.
//! - The runtime is multi-threaded, so the store sits behind a `RwLock` and
//!   every mutation holds the write lock until it completes.
//! - Validation is pure (`validation`) and returns `Result`, so handlers never
//!   branch on ad-hoc status codes.

use std::{future::Future, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{delete, get},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod time;
pub mod validation;

pub use config::Config;
pub use error::{ApiError, ServerError, ValidationError};
pub use routes::Health;
pub use state::AppState;
pub use store::{SharedStore, Todo, TodoStore};

use routes::{create_todo, delete_todo, health, list_todos};

/// Router with a fresh store.
pub fn app(config: Config) -> Router {
    router(AppState::new(config))
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", delete(delete_todo))
        .route("/api/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn run(listener: TcpListener, config: Config) -> Result<(), std::io::Error> {
    serve(listener, app(config), shutdown_signal()).await
}

/// Serve `router` until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
