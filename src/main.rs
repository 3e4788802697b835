use plateful_api::app::{app, AppState};
use plateful_api::config;
use plateful_api::database::manager::DatabaseManager;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Plateful API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect()
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    let app = app(AppState { pool });

    // Allow tests or deployments to override port via env
    let port = std::env::var("PLATEFUL_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Plateful API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
