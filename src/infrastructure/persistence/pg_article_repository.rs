//! PostgreSQL implementation of article repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{Article, ArticleChoice, NewArticle, UpdateArticle};
use crate::domain::repositories::ArticleRepository;
use crate::domain::search::ArticlePredicate;
use crate::error::AppError;
use crate::infrastructure::persistence::pg_tag_repository::{replace_links, upsert_tag};

/// Article columns with the category name and the sorted tag names joined in.
const ARTICLE_SELECT: &str = r#"
    SELECT a.id, a.title, a.author, a.text, a.category_id,
           c.name AS category_name,
           ARRAY(
               SELECT t.name
               FROM article_tags atg
               JOIN tags t ON t.id = atg.tag_id
               WHERE atg.article_id = a.id
               ORDER BY t.name
           ) AS tags,
           a.created_at, a.updated_at
    FROM articles a
    LEFT JOIN categories c ON c.id = a.category_id
"#;

/// PostgreSQL repository for articles.
///
/// Search predicates are rendered into a single `WHERE` clause. Tag and
/// comment conditions use `EXISTS` subqueries, so no article is returned
/// twice.
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
}

impl PgArticleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    author: String,
    text: String,
    category_id: Option<i64>,
    category_name: Option<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        let mut article = Article::new(row.id, row.title, row.author, row.text, row.created_at)
            .with_tags(row.tags);
        if let (Some(id), Some(name)) = (row.category_id, row.category_name) {
            article = article.with_category(id, name);
        }
        article.updated_at = row.updated_at;
        article
    }
}

#[derive(Debug, FromRow)]
struct ChoiceRow {
    id: i64,
    title: String,
}

/// Appends `predicate` as a boolean SQL expression over alias `a`.
fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &ArticlePredicate) {
    match predicate {
        ArticlePredicate::All => {
            builder.push("TRUE");
        }
        ArticlePredicate::TitleContains(term) => {
            builder.push("a.title ILIKE ").push_bind(contains_pattern(term));
        }
        ArticlePredicate::TextContains(term) => {
            builder.push("a.text ILIKE ").push_bind(contains_pattern(term));
        }
        ArticlePredicate::AuthorContains(term) => {
            builder.push("a.author ILIKE ").push_bind(contains_pattern(term));
        }
        ArticlePredicate::TagMatches(term) => {
            builder
                .push(
                    "EXISTS (SELECT 1 FROM article_tags atg JOIN tags t ON t.id = atg.tag_id \
                     WHERE atg.article_id = a.id AND LOWER(t.name) = LOWER(",
                )
                .push_bind(term.clone())
                .push("))");
        }
        ArticlePredicate::TagNamed(name) => {
            builder
                .push(
                    "EXISTS (SELECT 1 FROM article_tags atg JOIN tags t ON t.id = atg.tag_id \
                     WHERE atg.article_id = a.id AND t.name = ",
                )
                .push_bind(name.clone())
                .push(")");
        }
        ArticlePredicate::CommentTextContains(term) => {
            builder
                .push("EXISTS (SELECT 1 FROM comments cm WHERE cm.article_id = a.id AND cm.text ILIKE ")
                .push_bind(contains_pattern(term))
                .push(")");
        }
        ArticlePredicate::CommentAuthorContains(term) => {
            builder
                .push("EXISTS (SELECT 1 FROM comments cm WHERE cm.article_id = a.id AND cm.author ILIKE ")
                .push_bind(contains_pattern(term))
                .push(")");
        }
        ArticlePredicate::Any(parts) => push_joined(builder, parts, " OR ", "FALSE"),
        ArticlePredicate::Every(parts) => push_joined(builder, parts, " AND ", "TRUE"),
    }
}

fn push_joined(
    builder: &mut QueryBuilder<'_, Postgres>,
    parts: &[ArticlePredicate],
    separator: &str,
    empty: &str,
) {
    if parts.is_empty() {
        builder.push(empty);
        return;
    }

    builder.push("(");
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            builder.push(separator);
        }
        push_predicate(builder, part);
    }
    builder.push(")");
}

/// `%term%` with LIKE wildcards in `term` escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Gets or creates each tag and makes them the article's complete tag set.
async fn save_tags(
    conn: &mut PgConnection,
    article_id: i64,
    names: &[String],
) -> Result<(), AppError> {
    let mut tag_ids = Vec::with_capacity(names.len());
    for name in names {
        tag_ids.push(upsert_tag(&mut *conn, name).await?.id);
    }

    replace_links(conn, article_id, &tag_ids).await
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn create(&self, new_article: NewArticle) -> Result<Article, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO articles (title, author, text, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_article.title)
        .bind(&new_article.author)
        .bind(&new_article.text)
        .bind(new_article.category_id)
        .fetch_one(&mut *tx)
        .await?;

        save_tags(&mut tx, id, &new_article.tags).await?;
        tx.commit().await?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::internal("Inserted article not found", json!({"id": id}))
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new(ARTICLE_SELECT);
        builder.push(" WHERE a.id = ").push_bind(id);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Article::from))
    }

    async fn update(&self, id: i64, update: UpdateArticle) -> Result<Article, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE articles
            SET title = $1, author = $2, text = $3, category_id = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING id
            "#,
        )
        .bind(&update.title)
        .bind(&update.author)
        .bind(&update.text)
        .bind(update.category_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Err(AppError::not_found("Article not found", json!({"id": id})));
        }

        save_tags(&mut tx, id, &update.tags).await?;
        tx.commit().await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Article not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(
        &self,
        predicate: &ArticlePredicate,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Article>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new(ARTICLE_SELECT);
        builder.push(" WHERE ");
        push_predicate(&mut builder, predicate);
        builder
            .push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn count(&self, predicate: &ArticlePredicate) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM articles a WHERE ");
        push_predicate(&mut builder, predicate);

        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_choices(&self) -> Result<Vec<ArticleChoice>, AppError> {
        let rows = sqlx::query_as::<_, ChoiceRow>(
            "SELECT id, title FROM articles ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ArticleChoice {
                id: r.id,
                title: r.title,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(predicate: &ArticlePredicate) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("");
        push_predicate(&mut builder, predicate);
        builder.sql().to_string()
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("cat"), "%cat%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_render_simple_search() {
        let sql = render(&ArticlePredicate::simple_search(Some("rust")));
        assert_eq!(sql.matches(" OR ").count(), 2);
        assert!(sql.starts_with("(a.title ILIKE $1"));
        assert!(sql.contains("a.author ILIKE $2"));
        assert!(sql.contains("LOWER(t.name) = LOWER($3)"));
    }

    #[test]
    fn test_render_empty_groups() {
        assert_eq!(render(&ArticlePredicate::Any(vec![])), "FALSE");
        assert_eq!(render(&ArticlePredicate::Every(vec![])), "TRUE");
        assert_eq!(render(&ArticlePredicate::All), "TRUE");
    }

    #[test]
    fn test_render_comment_predicates_use_exists() {
        let sql = render(&ArticlePredicate::Every(vec![
            ArticlePredicate::CommentTextContains("cat".to_string()),
            ArticlePredicate::CommentAuthorContains("bob".to_string()),
        ]));
        assert_eq!(sql.matches("EXISTS (SELECT 1 FROM comments cm").count(), 2);
        assert!(sql.contains(" AND "));
    }
}
