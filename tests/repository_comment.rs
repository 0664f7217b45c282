mod common;

use blog::domain::entities::{NewComment, UpdateComment};
use blog::domain::repositories::CommentRepository;
use blog::infrastructure::persistence::PgCommentRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_comment_includes_article_title(pool: PgPool) {
    let article_id = common::create_test_article(&pool, "Commented article", "alice", "x").await;
    let repo = PgCommentRepository::new(Arc::new(pool));

    let comment = repo
        .create(NewComment {
            article_id,
            author: "bob".to_string(),
            text: "Nice post".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(comment.article_id, article_id);
    assert_eq!(comment.article_title, "Commented article");
    assert_eq!(comment.author, "bob");
}

#[sqlx::test]
async fn test_create_comment_for_missing_article_fails(pool: PgPool) {
    let repo = PgCommentRepository::new(Arc::new(pool));

    let result = repo
        .create(NewComment {
            article_id: 12345,
            author: "bob".to_string(),
            text: "Nice post".to_string(),
        })
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_update_comment_moves_between_articles(pool: PgPool) {
    let first = common::create_test_article(&pool, "First article title", "alice", "x").await;
    let second = common::create_test_article(&pool, "Second article title", "alice", "x").await;
    let id = common::create_test_comment(&pool, first, "bob", "Nice").await;
    let repo = PgCommentRepository::new(Arc::new(pool));

    let updated = repo
        .update(
            id,
            UpdateComment {
                article_id: second,
                author: "bob".to_string(),
                text: "Edited".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.article_id, second);
    assert_eq!(updated.article_title, "Second article title");
    assert_eq!(updated.text, "Edited");
}

#[sqlx::test]
async fn test_update_missing_comment_is_not_found(pool: PgPool) {
    let article_id = common::create_test_article(&pool, "Commented article", "alice", "x").await;
    let repo = PgCommentRepository::new(Arc::new(pool));

    let result = repo
        .update(
            777,
            UpdateComment {
                article_id,
                author: "bob".to_string(),
                text: "Edited".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(blog::AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_list_and_count_per_article(pool: PgPool) {
    let first = common::create_test_article(&pool, "First article title", "alice", "x").await;
    let second = common::create_test_article(&pool, "Second article title", "alice", "x").await;
    for i in 1..=4 {
        common::create_test_comment(&pool, first, "bob", &format!("Comment {i}")).await;
    }
    common::create_test_comment(&pool, second, "carol", "Elsewhere").await;
    let repo = PgCommentRepository::new(Arc::new(pool));

    assert_eq!(repo.count(Some(first)).await.unwrap(), 4);
    assert_eq!(repo.count(None).await.unwrap(), 5);

    let page = repo.list(Some(first), 0, 3).await.unwrap();
    assert_eq!(page.len(), 3);
    assert_eq!(page[0].text, "Comment 4");

    let all = repo.list(None, 0, 10).await.unwrap();
    assert_eq!(all[0].text, "Elsewhere");
}

#[sqlx::test]
async fn test_delete_comment(pool: PgPool) {
    let article_id = common::create_test_article(&pool, "Commented article", "alice", "x").await;
    let id = common::create_test_comment(&pool, article_id, "bob", "Bye").await;
    let repo = PgCommentRepository::new(Arc::new(pool));

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete(id).await.unwrap());
}
