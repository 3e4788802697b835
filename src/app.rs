use axum::{
    extract::{DefaultBodyLimit, State},
    http::HeaderValue,
    middleware,
    routing::{get, put},
    Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config;
use crate::database::manager::DatabaseManager;
use crate::handlers::{groups, notifications};
use crate::middleware::jwt_auth_middleware;

/// Per-request application state. The pool is handed to handlers through
/// axum State rather than a process-wide handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(service_routes(state.clone()))
        .merge(group_routes(state.clone()))
        .merge(notification_routes(state))
        // Global middleware
        .layer(DefaultBodyLimit::max(config::config().api.max_request_size_bytes))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// CORS per the security config: disabled entirely, locked to the
/// configured origins, or permissive when no origins are listed
fn cors_layer() -> CorsLayer {
    let security = &config::config().security;

    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

fn service_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state)
}

fn group_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/groups", get(groups::group_list))
        .route("/api/groups/list", get(groups::group_list))
        .route("/api/groups/my", get(groups::group_my))
        .route("/api/groups/search/:phrase", get(groups::group_search))
        .route("/api/groups/:group_id", get(groups::group_show))
        .route("/api/groups/:group_id/join", get(groups::group_join))
        .route(
            "/api/groups/:group_id/posts",
            get(groups::post_list).post(groups::post_create),
        )
        .route_layer(middleware::from_fn(jwt_auth_middleware))
        .with_state(state)
}

fn notification_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/notifications", get(notifications::notification_list))
        .route(
            "/api/notifications/:notification_id/viewed",
            put(notifications::notification_mark_viewed),
        )
        .route_layer(middleware::from_fn(jwt_auth_middleware))
        .with_state(state)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Plateful API",
            "version": version,
            "description": "Social backend for food-enthusiast communities",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "groups": "/api/groups[/list|/my|/:id] (protected)",
                "join": "/api/groups/:id/join (protected)",
                "posts": "/api/groups/:id/posts (protected)",
                "search": "/api/groups/search/:phrase (protected)",
                "notifications": "/api/notifications (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
