use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{models::response::Response, AppState, Result};

pub mod posts;

pub async fn healthz(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    sqlx::query("SELECT 1").execute(&app_state.db_pool).await?;

    Ok((
        StatusCode::OK,
        Json(Response {
            status: "success",
            message: "ok".to_string(),
        }),
    ))
}
