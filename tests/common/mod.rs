#![allow(dead_code)]

use blog::domain::pagination::Paginator;
use blog::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_category(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn get_default_category(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT id FROM categories WHERE name = 'General'")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_article(pool: &PgPool, title: &str, author: &str, text: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO articles (title, author, text) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(title)
    .bind(author)
    .bind(text)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Attaches tags to an article, creating missing ones.
pub async fn tag_article(pool: &PgPool, article_id: i64, tags: &[&str]) {
    for name in tags {
        let tag_id: i64 = sqlx::query_scalar(
            "INSERT INTO tags (name) VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING id",
        )
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();

        sqlx::query("INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)")
            .bind(article_id)
            .bind(tag_id)
            .execute(pool)
            .await
            .unwrap();
    }
}

pub async fn create_test_comment(pool: &PgPool, article_id: i64, author: &str, text: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO comments (article_id, author, text) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(article_id)
    .bind(author)
    .bind(text)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar(&sql).fetch_one(pool).await.unwrap()
}

/// State with the production page sizes: articles 3 per page with 1 orphan,
/// comments 3 per page without orphans.
pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        Paginator::new(3, 1),
        Paginator::new(3, 0),
    )
}
