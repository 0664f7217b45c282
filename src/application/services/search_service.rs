//! Full article search service.

use std::sync::Arc;

use crate::application::services::article_service::fetch_page;
use crate::domain::entities::Article;
use crate::domain::pagination::{Page, PageRequest, Paginator};
use crate::domain::repositories::ArticleRepository;
use crate::domain::search::FullSearch;
use crate::error::AppError;

/// Runs validated full searches over articles, their tags and comments.
pub struct SearchService<A: ArticleRepository> {
    article_repository: Arc<A>,
    paginator: Paginator,
}

impl<A: ArticleRepository> SearchService<A> {
    pub fn new(article_repository: Arc<A>, paginator: Paginator) -> Self {
        Self {
            article_repository,
            paginator,
        }
    }

    /// Validates `search` and returns one page of matching articles.
    ///
    /// Each article appears once even when it matches through several tags
    /// or comments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the form is invalid, see
    /// [`FullSearch::build`].
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search(
        &self,
        search: &FullSearch,
        page: &PageRequest,
    ) -> Result<Page<Article>, AppError> {
        let predicate = search.build()?;

        let results = fetch_page(
            self.article_repository.as_ref(),
            &self.paginator,
            &predicate,
            page,
        )
        .await?;

        metrics::counter!("blog_searches_total").increment(1);
        tracing::debug!(
            count = results.count,
            page = results.number,
            "Full search executed"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockArticleRepository;
    use crate::domain::search::{ArticlePredicate, AuthorScope, TextScope};
    use chrono::Utc;

    #[tokio::test]
    async fn test_search_rejects_empty_form_without_querying() {
        let service = SearchService::new(Arc::new(MockArticleRepository::new()), Paginator::new(3, 1));

        let result = service
            .search(&FullSearch::default(), &PageRequest::First)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_search_by_title_and_comment_author() {
        let mut articles = MockArticleRepository::new();
        let expected = ArticlePredicate::Every(vec![
            ArticlePredicate::TitleContains("cat".to_string()),
            ArticlePredicate::CommentAuthorContains("bob".to_string()),
        ]);

        let for_count = expected.clone();
        articles
            .expect_count()
            .withf(move |p| *p == for_count)
            .times(1)
            .returning(|_| Ok(1));
        articles
            .expect_search()
            .withf(move |p, offset, limit| *p == expected && *offset == 0 && *limit == 1)
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![Article::new(
                    1,
                    "All about cats".to_string(),
                    "alice".to_string(),
                    "Meow".to_string(),
                    Utc::now(),
                )])
            });

        let service = SearchService::new(Arc::new(articles), Paginator::new(3, 1));

        let search = FullSearch {
            text: Some(" cat ".to_string()),
            text_scope: TextScope {
                in_title: true,
                ..TextScope::default()
            },
            author: Some("bob".to_string()),
            author_scope: AuthorScope {
                in_comment_author: true,
                ..AuthorScope::default()
            },
        };

        let page = service.search(&search, &PageRequest::First).await.unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.items[0].title, "All about cats");
    }
}
