//! Glossa Translation Server binary.

use std::net::SocketAddr;

use glossa_server::auth::password::hash_password;
use glossa_server::metrics::setup::init_metrics;
use glossa_server::{AppState, run_server_with_state};
use glossa_store::Database;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get server configuration from environment
    let host = std::env::var("GLOSSA_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("GLOSSA_PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .expect("GLOSSA_PORT must be a valid port number");

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid address");

    let db_path = std::env::var("GLOSSA_DB_PATH").unwrap_or_else(|_| "glossa.db".to_string());

    tracing::info!("Starting Glossa Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Database: {}", db_path);

    // Open the store (runs migrations)
    let db = Database::open(&db_path).expect("Failed to open database");

    // Seed the first admin user from the environment on an empty user table
    if db.count_users().expect("Failed to query users") == 0 {
        if let (Ok(email), Ok(password)) = (
            std::env::var("GLOSSA_ADMIN_EMAIL"),
            std::env::var("GLOSSA_ADMIN_PASSWORD"),
        ) {
            db.create_user(&email, &hash_password(&password))
                .expect("Failed to seed admin user");
            tracing::info!(email = %email, "Seeded admin user");
        } else {
            tracing::warn!(
                "No users exist and GLOSSA_ADMIN_EMAIL/GLOSSA_ADMIN_PASSWORD are unset; \
                 the API will reject every login"
            );
        }
    }

    // Initialize Prometheus exporter
    let prometheus_handle = init_metrics();

    // Create application state
    let state = AppState::new(db);

    // Run server
    run_server_with_state(addr, state, prometheus_handle).await?;

    Ok(())
}
