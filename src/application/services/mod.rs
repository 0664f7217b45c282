//! Business logic services for the application layer.

pub mod article_service;
pub mod comment_service;
pub mod search_service;

pub use article_service::ArticleService;
pub use comment_service::CommentService;
pub use search_service::SearchService;
