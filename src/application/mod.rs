//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::article_service::ArticleService`] - Article listing, editing and tags
//! - [`services::comment_service::CommentService`] - Comment editing and listings
//! - [`services::search_service::SearchService`] - Full search form execution
//!
//! Submitted forms and their validation rules live in [`forms`].

pub mod forms;
pub mod services;
