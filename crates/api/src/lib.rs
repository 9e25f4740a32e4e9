pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use state::AppState;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let origin = if allowed.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.app.cors_origins);

    // Owner routes (JWT)
    let invitation_routes = Router::new()
        .route(
            "/",
            get(routes::invitation::list).post(routes::invitation::create),
        )
        .route("/publish", post(routes::invitation::create_and_publish))
        .route(
            "/{id}",
            get(routes::invitation::get).delete(routes::invitation::delete),
        )
        .route(
            "/{id}/content",
            get(routes::invitation::load_content).put(routes::invitation::save_content),
        )
        .route("/{id}/meta", get(routes::invitation::meta))
        .route(
            "/{id}/status",
            axum::routing::patch(routes::invitation::change_status),
        )
        .route("/{id}/publish", post(routes::invitation::publish))
        .route("/{id}/preview", post(routes::invitation::issue_preview));

    // Admin mirrors (x-admin-key)
    let admin_routes = Router::new()
        .route("/", get(routes::admin::list))
        .route(
            "/{id}/content",
            get(routes::admin::load_content).put(routes::admin::save_content),
        )
        .route("/{id}/meta", get(routes::admin::meta))
        .route(
            "/{id}/status",
            axum::routing::patch(routes::admin::change_status),
        )
        .route("/{id}/publish", post(routes::admin::publish))
        .route("/{id}/preview", post(routes::admin::issue_preview));

    // Compose API
    let api = Router::new()
        .nest("/invitation", invitation_routes)
        .nest("/admin/invitation", admin_routes)
        .route("/preview/{token}", get(routes::public::preview))
        .route("/public/{public_id}", get(routes::public::invitation));

    // Health check
    let health = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .merge(health)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
