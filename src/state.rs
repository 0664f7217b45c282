//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{ArticleService, CommentService, SearchService};
use crate::domain::pagination::Paginator;
use crate::infrastructure::persistence::{
    PgArticleRepository, PgCategoryRepository, PgCommentRepository, PgTagRepository,
};

pub type PgArticleService =
    ArticleService<PgArticleRepository, PgTagRepository, PgCategoryRepository>;
pub type PgCommentService = CommentService<PgCommentRepository, PgArticleRepository>;
pub type PgSearchService = SearchService<PgArticleRepository>;

/// Services backed by PostgreSQL, cloned cheaply into each request.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub article_service: Arc<PgArticleService>,
    pub comment_service: Arc<PgCommentService>,
    pub search_service: Arc<PgSearchService>,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    ///
    /// `articles` paginates the index and search results, `comments` every
    /// comment listing.
    pub fn new(pool: Arc<PgPool>, articles: Paginator, comments: Paginator) -> Self {
        let article_repository = Arc::new(PgArticleRepository::new(pool.clone()));
        let comment_repository = Arc::new(PgCommentRepository::new(pool.clone()));
        let tag_repository = Arc::new(PgTagRepository::new(pool.clone()));
        let category_repository = Arc::new(PgCategoryRepository::new(pool.clone()));

        let article_service = Arc::new(ArticleService::new(
            article_repository.clone(),
            tag_repository,
            category_repository,
            articles,
        ));
        let comment_service = Arc::new(CommentService::new(
            comment_repository,
            article_repository.clone(),
            comments,
        ));
        let search_service = Arc::new(SearchService::new(article_repository, articles));

        Self {
            pool,
            article_service,
            comment_service,
            search_service,
        }
    }
}
