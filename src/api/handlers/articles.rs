//! Handlers for article read endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::article::{ArticleResponse, CommentResponse};
use crate::api::dto::pagination::PageResponse;
use crate::application::forms::{ListQuery, PageQuery};
use crate::domain::pagination::PageRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Lists articles, newest first.
///
/// # Endpoint
///
/// `GET /api/articles`
///
/// # Query Parameters
///
/// - `search` (optional): Keyword matched against title, author and tags
/// - `tag` (optional): Exact tag name
/// - `page` (optional): Page number or `last`; out-of-range values are clamped
///
/// # Response
///
/// ```json
/// {
///   "pagination": {"page": 1, "page_size": 3, "total_items": 7, "total_pages": 2,
///                  "has_next": true, "has_previous": false},
///   "items": [{"id": 7, "title": "...", "tags": ["Food"], ...}]
/// }
/// ```
pub async fn list_articles_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<PageResponse<ArticleResponse>>, AppError> {
    let page = state
        .article_service
        .list_articles(
            query.search.as_deref(),
            query.tag_filter(),
            &PageRequest::parse(query.page.as_deref()),
        )
        .await?;

    Ok(Json(page.into()))
}

/// Retrieves one article.
///
/// # Endpoint
///
/// `GET /api/articles/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the article does not exist.
pub async fn get_article_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArticleResponse>, AppError> {
    let article = state.article_service.get_article(id).await?;
    Ok(Json(article.into()))
}

/// Lists the comments of one article, newest first.
///
/// # Endpoint
///
/// `GET /api/articles/{id}/comments?page=N`
///
/// # Errors
///
/// Returns 404 Not Found if the article does not exist.
pub async fn list_article_comments_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse<CommentResponse>>, AppError> {
    let article = state.article_service.get_article(id).await?;

    let page = state
        .comment_service
        .list_comments(Some(article.id), &PageRequest::parse(query.page.as_deref()))
        .await?;

    Ok(Json(page.into()))
}
