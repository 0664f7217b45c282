//! API route configuration.
//!
//! The JSON API is read-only and public.

use crate::api::handlers::{
    get_article_handler, list_article_comments_handler, list_articles_handler, list_tags_handler,
    search_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /articles`                 - Paginated article list (`search`, `tag`, `page`)
/// - `GET /articles/{id}`            - One article
/// - `GET /articles/{id}/comments`   - Paginated comments of an article
/// - `GET /search`                   - Full search
/// - `GET /tags`                     - All tags
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(list_articles_handler))
        .route("/articles/{id}", get(get_article_handler))
        .route("/articles/{id}/comments", get(list_article_comments_handler))
        .route("/search", get(search_handler))
        .route("/tags", get(list_tags_handler))
}
