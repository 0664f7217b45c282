//! Handler for the tag list endpoint.

use axum::{Json, extract::State};

use crate::api::dto::article::TagResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all tags ordered by name.
///
/// # Endpoint
///
/// `GET /api/tags`
pub async fn list_tags_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<TagResponse>>, AppError> {
    let tags = state.article_service.list_tags().await?;
    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}
