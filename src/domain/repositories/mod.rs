//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ArticleRepository`] - Article CRUD and predicate search
//! - [`CommentRepository`] - Comment CRUD and listings
//! - [`TagRepository`] - Tag get-or-create and article tag sets
//! - [`CategoryRepository`] - Category management
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod article_repository;
pub mod category_repository;
pub mod comment_repository;
pub mod tag_repository;

pub use article_repository::ArticleRepository;
pub use category_repository::CategoryRepository;
pub use comment_repository::CommentRepository;
pub use tag_repository::TagRepository;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
