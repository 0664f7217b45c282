//! Repository trait for categories.

use crate::domain::entities::{Category, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for article categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Finds a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// Finds a category by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, AppError>;

    /// Lists all categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Category>, AppError>;

    /// Deletes a category; its articles become uncategorized.
    ///
    /// Returns `Ok(false)` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
