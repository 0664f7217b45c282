//! Core domain entities representing the blog data model.
//!
//! Entities are plain data structures. Write models are separate structs:
//! `NewArticle`, `NewComment`, `NewCategory` for inserts and
//! `UpdateArticle`, `UpdateComment` for full-row updates.
//!
//! # Entity Types
//!
//! - [`Article`] - A blog post with category and tags joined in
//! - [`Comment`] - A reader comment on an article
//! - [`Tag`] - A lazily created label
//! - [`Category`] - A reference grouping for articles

pub mod article;
pub mod category;
pub mod comment;
pub mod tag;

pub use article::{Article, ArticleChoice, NewArticle, UpdateArticle};
pub use category::{Category, NewCategory};
pub use comment::{Comment, NewComment, UpdateComment};
pub use tag::Tag;
