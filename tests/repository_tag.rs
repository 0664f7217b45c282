mod common;

use blog::domain::repositories::TagRepository;
use blog::infrastructure::persistence::PgTagRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_get_or_create_reuses_existing_tag(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool.clone()));

    let first = repo.get_or_create("Food").await.unwrap();
    let second = repo.get_or_create("Food").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(common::count_rows(&pool, "tags").await, 1);
}

#[sqlx::test]
async fn test_get_or_create_is_case_sensitive(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool));

    let upper = repo.get_or_create("Food").await.unwrap();
    let lower = repo.get_or_create("food").await.unwrap();

    assert_ne!(upper.id, lower.id);
}

#[sqlx::test]
async fn test_replace_article_tags(pool: PgPool) {
    let article_id = common::create_test_article(&pool, "Tagged article title", "alice", "x").await;
    let repo = PgTagRepository::new(Arc::new(pool));

    let food = repo.get_or_create("Food").await.unwrap();
    let drink = repo.get_or_create("Drink").await.unwrap();
    let travel = repo.get_or_create("Travel").await.unwrap();

    repo.replace_article_tags(article_id, vec![food.id, drink.id])
        .await
        .unwrap();
    repo.replace_article_tags(article_id, vec![drink.id, travel.id])
        .await
        .unwrap();

    let names: Vec<String> = repo
        .list_for_article(article_id)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

    assert_eq!(names, vec!["Drink".to_string(), "Travel".to_string()]);
}

#[sqlx::test]
async fn test_replace_with_empty_set_clears_tags(pool: PgPool) {
    let article_id = common::create_test_article(&pool, "Tagged article title", "alice", "x").await;
    common::tag_article(&pool, article_id, &["Food", "Drink"]).await;
    let repo = PgTagRepository::new(Arc::new(pool));

    repo.replace_article_tags(article_id, Vec::new()).await.unwrap();

    assert!(repo.list_for_article(article_id).await.unwrap().is_empty());
    assert_eq!(repo.list().await.unwrap().len(), 2);
}

#[sqlx::test]
async fn test_list_tags_by_name(pool: PgPool) {
    let repo = PgTagRepository::new(Arc::new(pool));
    repo.get_or_create("b-tag").await.unwrap();
    repo.get_or_create("a-tag").await.unwrap();

    let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|t| t.name).collect();

    assert_eq!(names, vec!["a-tag".to_string(), "b-tag".to_string()]);
}
