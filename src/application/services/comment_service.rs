//! Comment management service.

use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::application::forms::CommentInput;
use crate::domain::entities::{Comment, NewComment, UpdateComment};
use crate::domain::pagination::{Page, PageRequest, Paginator};
use crate::domain::repositories::{ArticleRepository, CommentRepository};
use crate::error::AppError;

const UNKNOWN_ARTICLE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// Service for creating, editing and listing comments.
pub struct CommentService<M: CommentRepository, A: ArticleRepository> {
    comment_repository: Arc<M>,
    article_repository: Arc<A>,
    paginator: Paginator,
}

impl<M: CommentRepository, A: ArticleRepository> CommentService<M, A> {
    /// Creates a new comment service paginating with `paginator`.
    pub fn new(comment_repository: Arc<M>, article_repository: Arc<A>, paginator: Paginator) -> Self {
        Self {
            comment_repository,
            article_repository,
            paginator,
        }
    }

    /// Lists one page of comments, newest first, optionally for one article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_comments(
        &self,
        article_id: Option<i64>,
        page: &PageRequest,
    ) -> Result<Page<Comment>, AppError> {
        let count = self.comment_repository.count(article_id).await?;
        let window = self.paginator.window(count, page);

        let items = if window.limit > 0 {
            self.comment_repository
                .list(article_id, window.offset, window.limit)
                .await?
        } else {
            Vec::new()
        };

        Ok(window.into_page(items))
    }

    /// Retrieves a comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_comment(&self, id: i64) -> Result<Comment, AppError> {
        self.comment_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment not found", json!({"id": id})))
    }

    /// Validates and stores a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the form is invalid or the article
    /// does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_comment(&self, input: CommentInput) -> Result<Comment, AppError> {
        let (article_id, author, text) = self.validated(input).await?;

        let comment = self
            .comment_repository
            .create(NewComment {
                article_id,
                author,
                text,
            })
            .await?;

        metrics::counter!("blog_comments_created_total").increment(1);
        tracing::info!(comment_id = comment.id, article_id, "Comment created");

        Ok(comment)
    }

    /// Validates and saves an existing comment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist.
    /// Returns [`AppError::Validation`] if the form is invalid or the article
    /// does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_comment(&self, id: i64, input: CommentInput) -> Result<Comment, AppError> {
        let (article_id, author, text) = self.validated(input).await?;

        let comment = self
            .comment_repository
            .update(
                id,
                UpdateComment {
                    article_id,
                    author,
                    text,
                },
            )
            .await?;

        tracing::info!(comment_id = id, article_id, "Comment updated");

        Ok(comment)
    }

    /// Deletes a comment and returns the id of the article it belonged to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the comment does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_comment(&self, id: i64) -> Result<i64, AppError> {
        let comment = self.get_comment(id).await?;

        if !self.comment_repository.delete(id).await? {
            return Err(AppError::not_found("Comment not found", json!({"id": id})));
        }

        tracing::info!(comment_id = id, article_id = comment.article_id, "Comment deleted");
        Ok(comment.article_id)
    }

    async fn validated(&self, input: CommentInput) -> Result<(i64, String, String), AppError> {
        let input = input.trimmed();
        input.validate()?;

        let article_id = input
            .article
            .ok_or_else(|| AppError::invalid_field("article", "This field is required."))?;

        if self.article_repository.find_by_id(article_id).await?.is_none() {
            return Err(AppError::invalid_field("article", UNKNOWN_ARTICLE));
        }

        Ok((article_id, input.author, input.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Article;
    use crate::domain::repositories::{MockArticleRepository, MockCommentRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn create_test_comment(id: i64, article_id: i64) -> Comment {
        Comment::new(
            id,
            article_id,
            "A perfectly fine title".to_string(),
            "bob".to_string(),
            "Nice post".to_string(),
            Utc::now(),
        )
    }

    fn create_test_article(id: i64) -> Article {
        Article::new(
            id,
            "A perfectly fine title".to_string(),
            "alice".to_string(),
            "Body".to_string(),
            Utc::now(),
        )
    }

    fn service(
        comments: MockCommentRepository,
        articles: MockArticleRepository,
    ) -> CommentService<MockCommentRepository, MockArticleRepository> {
        CommentService::new(Arc::new(comments), Arc::new(articles), Paginator::new(3, 0))
    }

    #[tokio::test]
    async fn test_list_comments_for_article_keeps_small_last_page() {
        let mut comments = MockCommentRepository::new();

        comments
            .expect_count()
            .with(eq(Some(1)))
            .times(1)
            .returning(|_| Ok(7));
        comments
            .expect_list()
            .with(eq(Some(1)), eq(6), eq(1))
            .times(1)
            .returning(|_, _, _| Ok(vec![create_test_comment(1, 1)]));

        let service = service(comments, MockArticleRepository::new());

        let page = service
            .list_comments(Some(1), &PageRequest::Number(3))
            .await
            .unwrap();

        assert_eq!(page.num_pages, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_create_comment_success() {
        let mut comments = MockCommentRepository::new();
        let mut articles = MockArticleRepository::new();

        articles
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(create_test_article(id))));
        comments
            .expect_create()
            .withf(|new| new.article_id == 1 && new.author == "bob" && new.text == "Nice post")
            .times(1)
            .returning(|_| Ok(create_test_comment(10, 1)));

        let service = service(comments, articles);

        let result = service
            .create_comment(CommentInput {
                article: Some(1),
                author: "  bob ".to_string(),
                text: "Nice post".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().id, 10);
    }

    #[tokio::test]
    async fn test_create_comment_unknown_article() {
        let mut articles = MockArticleRepository::new();
        articles.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = service(MockCommentRepository::new(), articles);

        let err = service
            .create_comment(CommentInput {
                article: Some(99),
                author: "bob".to_string(),
                text: "hi".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_error_info().details.get("article").is_some());
    }

    #[tokio::test]
    async fn test_create_comment_blank_text() {
        let service = service(MockCommentRepository::new(), MockArticleRepository::new());

        let result = service
            .create_comment(CommentInput {
                article: Some(1),
                author: "bob".to_string(),
                text: "   ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_comment_returns_article_id() {
        let mut comments = MockCommentRepository::new();

        comments
            .expect_find_by_id()
            .with(eq(10))
            .times(1)
            .returning(|id| Ok(Some(create_test_comment(id, 4))));
        comments
            .expect_delete()
            .with(eq(10))
            .times(1)
            .returning(|_| Ok(true));

        let service = service(comments, MockArticleRepository::new());

        assert_eq!(service.delete_comment(10).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_get_comment_not_found() {
        let mut comments = MockCommentRepository::new();
        comments.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = service(comments, MockArticleRepository::new());

        let result = service.get_comment(1).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
