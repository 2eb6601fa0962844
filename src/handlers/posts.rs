use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Extension, Json, Router,
};

use crate::{
    middleware::AuthenticatedUser, models::posts::CreatePostDto, AppState, Result,
};

pub fn posts_handler() -> Router {
    Router::new().route("/", post(create_post).get(get_posts))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(new_post): Json<CreatePostDto>,
) -> Result<impl IntoResponse> {
    let post = app_state
        .posts_service
        .create_post(
            auth.user_id,
            new_post.text.as_deref(),
            new_post.img.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

async fn get_posts(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let posts = app_state.posts_service.get_posts().await?;
    Ok((StatusCode::OK, Json(posts)))
}
