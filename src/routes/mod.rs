use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Extension, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{healthz, posts::posts_handler},
    middleware, AppState,
};

pub fn create_routes(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/posts", posts_handler().layer(from_fn(middleware::auth)))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new().nest("/api", api_route)
}

pub fn configure_cors() -> CorsLayer {
    CorsLayer::permissive()
}
