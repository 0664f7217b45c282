//! Handler for the full search endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::article::ArticleResponse;
use crate::api::dto::pagination::PageResponse;
use crate::application::forms::SearchForm;
use crate::domain::pagination::PageRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Runs a full search.
///
/// # Endpoint
///
/// `GET /api/search`
///
/// # Query Parameters
///
/// - `text` with any of `in_title`, `in_text`, `in_tags`, `in_comment_text`
/// - `author` with any of `in_article_author`, `in_comment_author`
/// - `page` (optional)
///
/// Checkbox parameters are set by `on`, `true`, `1` or `yes`.
///
/// # Errors
///
/// Returns 400 Bad Request when a term has no scope selected or both terms
/// are empty; `details` maps field names (`__all__` for the whole form) to
/// messages.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(form): Query<SearchForm>,
) -> Result<Json<PageResponse<ArticleResponse>>, AppError> {
    let page = state
        .search_service
        .search(
            &form.to_full_search(),
            &PageRequest::parse(form.page.as_deref()),
        )
        .await?;

    Ok(Json(page.into()))
}
