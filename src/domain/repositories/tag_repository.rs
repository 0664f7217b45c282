//! Repository trait for tags and article tag links.

use crate::domain::entities::Tag;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for tags.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTagRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_tag.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Returns the tag with exactly this name, inserting it if missing.
    ///
    /// Safe under concurrent calls for the same name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_or_create(&self, name: &str) -> Result<Tag, AppError>;

    /// Makes `tag_ids` the complete tag set of an article.
    ///
    /// Existing links are removed and the new ones inserted in one
    /// transaction, so readers never observe a partial set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the article or a tag does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn replace_article_tags(&self, article_id: i64, tag_ids: Vec<i64>)
    -> Result<(), AppError>;

    /// Lists the tags of one article ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_article(&self, article_id: i64) -> Result<Vec<Tag>, AppError>;

    /// Lists all tags ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Tag>, AppError>;
}
