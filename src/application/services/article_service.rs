//! Article listing, retrieval and editing service.

use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::application::forms::ArticleInput;
use crate::domain::entities::{
    Article, ArticleChoice, Category, NewArticle, Tag, UpdateArticle,
};
use crate::domain::pagination::{Page, PageRequest, Paginator};
use crate::domain::repositories::{ArticleRepository, CategoryRepository, TagRepository};
use crate::domain::search::ArticlePredicate;
use crate::domain::tags::parse_tag_names;
use crate::error::AppError;

/// Service for articles, their tags and categories.
///
/// Article writes go through [`ArticleInput`] validation; the tag field is
/// normalized and fully replaces the previous tag set on every save.
pub struct ArticleService<A: ArticleRepository, T: TagRepository, C: CategoryRepository> {
    article_repository: Arc<A>,
    tag_repository: Arc<T>,
    category_repository: Arc<C>,
    paginator: Paginator,
}

impl<A: ArticleRepository, T: TagRepository, C: CategoryRepository> ArticleService<A, T, C> {
    /// Creates a new article service paginating with `paginator`.
    pub fn new(
        article_repository: Arc<A>,
        tag_repository: Arc<T>,
        category_repository: Arc<C>,
        paginator: Paginator,
    ) -> Self {
        Self {
            article_repository,
            tag_repository,
            category_repository,
            paginator,
        }
    }

    /// Lists one page of articles, newest first.
    ///
    /// # Arguments
    ///
    /// - `search` - Keyword matched against title, author and tag names
    /// - `tag` - Exact tag name the articles must carry
    /// - `page` - Requested page, clamped into range
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_articles(
        &self,
        search: Option<&str>,
        tag: Option<&str>,
        page: &PageRequest,
    ) -> Result<Page<Article>, AppError> {
        let mut parts = vec![ArticlePredicate::simple_search(search)];
        if let Some(tag) = tag {
            parts.push(ArticlePredicate::TagNamed(tag.to_string()));
        }
        let predicate = ArticlePredicate::every(parts);

        fetch_page(self.article_repository.as_ref(), &self.paginator, &predicate, page).await
    }

    /// Retrieves an article with its category and tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_article(&self, id: i64) -> Result<Article, AppError> {
        self.article_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Article not found", json!({"id": id})))
    }

    /// Validates and stores a new article with its tags.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the form is invalid or the category
    /// does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_article(&self, input: ArticleInput) -> Result<Article, AppError> {
        let input = input.trimmed();
        input.validate()?;
        self.ensure_category(input.category).await?;

        let created = self
            .article_repository
            .create(NewArticle {
                title: input.title,
                author: input.author,
                text: input.text,
                category_id: input.category,
                tags: parse_tag_names(&input.tags),
            })
            .await?;

        metrics::counter!("blog_articles_created_total").increment(1);
        tracing::info!(article_id = created.id, tags = created.tags.len(), "Article created");

        Ok(created)
    }

    /// Validates and saves an existing article, replacing its tag set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Validation`] if the form is invalid or the category
    /// does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_article(&self, id: i64, input: ArticleInput) -> Result<Article, AppError> {
        let input = input.trimmed();
        input.validate()?;
        self.ensure_category(input.category).await?;

        let updated = self
            .article_repository
            .update(
                id,
                UpdateArticle {
                    title: input.title,
                    author: input.author,
                    text: input.text,
                    category_id: input.category,
                    tags: parse_tag_names(&input.tags),
                },
            )
            .await?;

        tracing::info!(article_id = id, tags = updated.tags.len(), "Article updated");

        Ok(updated)
    }

    /// Deletes an article with its comments and tag links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the article does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_article(&self, id: i64) -> Result<(), AppError> {
        if !self.article_repository.delete(id).await? {
            return Err(AppError::not_found("Article not found", json!({"id": id})));
        }

        metrics::counter!("blog_articles_deleted_total").increment(1);
        tracing::info!(article_id = id, "Article deleted");
        Ok(())
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.category_repository.list().await
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, AppError> {
        self.tag_repository.list().await
    }

    /// Articles as `(id, title)` choices for the comment form.
    pub async fn list_choices(&self) -> Result<Vec<ArticleChoice>, AppError> {
        self.article_repository.list_choices().await
    }

    async fn ensure_category(&self, category_id: Option<i64>) -> Result<(), AppError> {
        let Some(id) = category_id else {
            return Ok(());
        };

        match self.category_repository.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::invalid_field(
                "category",
                "Select a valid choice. That choice is not one of the available choices.",
            )),
        }
    }
}

/// Counts the matches, resolves the page and fetches only that window.
pub(super) async fn fetch_page<A: ArticleRepository>(
    repository: &A,
    paginator: &Paginator,
    predicate: &ArticlePredicate,
    page: &PageRequest,
) -> Result<Page<Article>, AppError> {
    let count = repository.count(predicate).await?;
    let window = paginator.window(count, page);

    let items = if window.limit > 0 {
        repository
            .search(predicate, window.offset, window.limit)
            .await?
    } else {
        Vec::new()
    };

    Ok(window.into_page(items))
}
