//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod articles;
pub mod health;
pub mod search;
pub mod tags;

pub use articles::{get_article_handler, list_article_comments_handler, list_articles_handler};
pub use health::health_handler;
pub use search::search_handler;
pub use tags::list_tags_handler;
