//! Repository trait for comment data access.

use crate::domain::entities::{Comment, NewComment, UpdateComment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for comments.
///
/// Listings are ordered newest first and can be narrowed to one article.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Inserts a comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Finds a comment by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, AppError>;

    /// Replaces the editable columns and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no comment has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateComment) -> Result<Comment, AppError>;

    /// Deletes a comment. Returns `Ok(false)` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists comments, optionally only those of one article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        article_id: Option<i64>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Comment>, AppError>;

    /// Counts comments, optionally only those of one article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, article_id: Option<i64>) -> Result<i64, AppError>;
}
