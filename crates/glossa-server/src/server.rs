use std::net::SocketAddr;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;

use crate::auth::middleware::require_auth;
use crate::handlers::{
    auth::{login, logout},
    export::export_translations,
    health::health_check,
    languages::{
        create_language, delete_language, get_language, list_languages, update_language,
    },
    metrics::metrics_handler,
    translations::{
        create_translation, delete_translation, get_translation, list_translations,
        update_translation,
    },
};
use crate::middleware::{LoggingLayer, RequestIdLayer};
use crate::state::AppState;

/// Creates the full application router.
pub fn create_router_with_state(state: AppState, prometheus_handle: PrometheusHandle) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer);

    // Router for metrics endpoint (different state)
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(prometheus_handle);

    // Token-guarded API surface
    let protected_router = Router::new()
        .route("/api/logout", post(logout))
        .route("/api/languages", get(list_languages).post(create_language))
        .route(
            "/api/languages/{id}",
            get(get_language)
                .put(update_language)
                .delete(delete_language),
        )
        .route(
            "/api/translations",
            get(list_translations).post(create_translation),
        )
        // The static segment must be registered alongside the capture;
        // axum matches /export before /{id}.
        .route("/api/translations/export", get(export_translations))
        .route(
            "/api/translations/{id}",
            get(get_translation)
                .put(update_translation)
                .delete(delete_translation),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let app_router = Router::new()
        .route("/health", get(health_check))
        .route("/api/login", post(login))
        .merge(protected_router)
        .with_state(state);

    Router::new()
        .merge(app_router)
        .merge(metrics_router)
        // HTTP metrics middleware
        .layer(middleware::from_fn(
            crate::metrics::http::http_metrics_middleware,
        ))
        .layer(middleware_stack)
}

/// Creates a router without state (for testing only - health endpoint).
pub fn create_router() -> Router {
    let middleware = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(LoggingLayer);

    Router::new()
        .route("/health", get(health_check))
        .layer(middleware)
}

/// Runs the server with the given state and metrics handle.
pub async fn run_server_with_state(
    addr: SocketAddr,
    state: AppState,
    prometheus_handle: PrometheusHandle,
) -> Result<(), std::io::Error> {
    let app = create_router_with_state(state, prometheus_handle);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
