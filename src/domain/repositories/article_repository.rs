//! Repository trait for article data access.

use crate::domain::entities::{Article, ArticleChoice, NewArticle, UpdateArticle};
use crate::domain::search::ArticlePredicate;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for articles.
///
/// Listings are always ordered newest first (`created_at DESC, id DESC`).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_article.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Inserts an article and links its tags, creating missing tags.
    ///
    /// The row, the tags and the links are written in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the category does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError>;

    /// Finds an article by id, with category and tags joined.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError>;

    /// Replaces the editable columns and the tag set, and bumps `updated_at`.
    ///
    /// Runs in one transaction; on failure the article keeps its old state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateArticle) -> Result<Article, AppError>;

    /// Deletes an article together with its comments and tag links.
    ///
    /// Returns `Ok(false)` if no article has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists articles matching `predicate`.
    ///
    /// # Arguments
    ///
    /// - `offset` - Number of matching articles to skip
    /// - `limit` - Maximum number of articles to return
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(
        &self,
        predicate: &ArticlePredicate,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Article>, AppError>;

    /// Counts distinct articles matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, predicate: &ArticlePredicate) -> Result<i64, AppError>;

    /// Lists `(id, title)` pairs of all articles, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_choices(&self) -> Result<Vec<ArticleChoice>, AppError>;
}
