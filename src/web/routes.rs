//! Blog page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    add_article_comment_handler, add_article_form_handler, add_comment_form_handler,
    article_detail_handler, comments_handler, create_article_handler, create_comment_handler,
    delete_article_form_handler, delete_article_handler, delete_comment_form_handler,
    delete_comment_handler, edit_article_form_handler, edit_comment_form_handler, index_handler,
    search_page_handler, search_submit_handler, update_article_handler, update_comment_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only pages.
///
/// # Endpoints
///
/// - `GET /` - Article index with keyword search and tag filter
/// - `GET /articles/{id}` - Article detail with comments
/// - `GET /comments` - Comment listing
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/articles/{id}", get(article_detail_handler))
        .route("/comments", get(comments_handler))
}

/// Form pages and their submissions.
///
/// Rate limited separately from [`page_routes`].
///
/// # Endpoints
///
/// - `GET|POST /articles/add`
/// - `GET|POST /articles/search`
/// - `GET|POST /articles/{id}/edit`
/// - `GET|POST /articles/{id}/delete`
/// - `POST /articles/{id}/comments`
/// - `GET|POST /comments/add`
/// - `GET|POST /comments/{id}/edit`
/// - `GET|POST /comments/{id}/delete`
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/articles/add",
            get(add_article_form_handler).post(create_article_handler),
        )
        .route(
            "/articles/search",
            get(search_page_handler).post(search_submit_handler),
        )
        .route(
            "/articles/{id}/edit",
            get(edit_article_form_handler).post(update_article_handler),
        )
        .route(
            "/articles/{id}/delete",
            get(delete_article_form_handler).post(delete_article_handler),
        )
        .route("/articles/{id}/comments", post(add_article_comment_handler))
        .route(
            "/comments/add",
            get(add_comment_form_handler).post(create_comment_handler),
        )
        .route(
            "/comments/{id}/edit",
            get(edit_comment_form_handler).post(update_comment_handler),
        )
        .route(
            "/comments/{id}/delete",
            get(delete_comment_form_handler).post(delete_comment_handler),
        )
}
