//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgArticleRepository`] - Articles and predicate search
//! - [`PgCommentRepository`] - Comments
//! - [`PgTagRepository`] - Tags and article tag links
//! - [`PgCategoryRepository`] - Categories

pub mod pg_article_repository;
pub mod pg_category_repository;
pub mod pg_comment_repository;
pub mod pg_tag_repository;

pub use pg_article_repository::PgArticleRepository;
pub use pg_category_repository::PgCategoryRepository;
pub use pg_comment_repository::PgCommentRepository;
pub use pg_tag_repository::PgTagRepository;
