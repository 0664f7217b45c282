mod common;

use axum::Router;
use axum_test::TestServer;
use blog::api;
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

fn ids(json: &serde_json::Value) -> Vec<i64> {
    let mut ids: Vec<i64> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    ids.sort();
    ids
}

#[sqlx::test]
async fn test_search_text_in_title_only(pool: PgPool) {
    let in_title = common::create_test_article(&pool, "All about big cats", "alice", "x").await;
    common::create_test_article(&pool, "Dogs and their owners", "bob", "a big cat story").await;
    let server = make_server(pool);

    let json = server
        .get("/api/search")
        .add_query_param("text", "BIG CAT")
        .add_query_param("in_title", "on")
        .await
        .json::<serde_json::Value>();

    assert_eq!(ids(&json), vec![in_title]);
}

#[sqlx::test]
async fn test_search_text_across_fields_is_or(pool: PgPool) {
    let by_title = common::create_test_article(&pool, "Pasta recipes for all", "alice", "x").await;
    let by_text = common::create_test_article(&pool, "Dinner tonight ideas", "bob", "fresh pasta").await;
    let by_tag = common::create_test_article(&pool, "Italian kitchen notes", "carol", "x").await;
    common::tag_article(&pool, by_tag, &["Pasta"]).await;
    let by_comment = common::create_test_article(&pool, "Weekend plans again", "dave", "x").await;
    common::create_test_comment(&pool, by_comment, "erin", "I love pasta").await;
    common::create_test_article(&pool, "Completely unrelated", "frank", "x").await;
    let server = make_server(pool);

    let json = server
        .get("/api/search")
        .add_query_param("text", "pasta")
        .add_query_param("in_title", "on")
        .add_query_param("in_text", "on")
        .add_query_param("in_tags", "on")
        .add_query_param("in_comment_text", "on")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["pagination"]["total_items"], 4);
    assert_eq!(json["pagination"]["total_pages"], 1);
    assert_eq!(ids(&json), vec![by_title, by_text, by_tag, by_comment]);
}

#[sqlx::test]
async fn test_search_text_and_author_are_combined_with_and(pool: PgPool) {
    let wanted = common::create_test_article(&pool, "Garden tomatoes guide", "alice", "x").await;
    common::create_test_article(&pool, "Garden roses guide", "bob", "x").await;
    common::create_test_article(&pool, "Kitchen tips and tricks", "alice", "x").await;
    let server = make_server(pool);

    let json = server
        .get("/api/search")
        .add_query_param("text", "garden")
        .add_query_param("in_title", "on")
        .add_query_param("author", "ALI")
        .add_query_param("in_article_author", "on")
        .await
        .json::<serde_json::Value>();

    assert_eq!(ids(&json), vec![wanted]);
}

#[sqlx::test]
async fn test_search_by_comment_author_returns_each_article_once(pool: PgPool) {
    let id = common::create_test_article(&pool, "Busy comment thread", "alice", "x").await;
    common::create_test_comment(&pool, id, "zoe", "one").await;
    common::create_test_comment(&pool, id, "zoey", "two").await;
    let server = make_server(pool);

    let json = server
        .get("/api/search")
        .add_query_param("author", "zoe")
        .add_query_param("in_comment_author", "on")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["pagination"]["total_items"], 1);
    assert_eq!(ids(&json), vec![id]);
}

#[sqlx::test]
async fn test_search_text_without_scope_is_rejected(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .get("/api/search")
        .add_query_param("text", "cats")
        .add_query_param("author", "bob")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["text"][0], "No search field selected");
    assert_eq!(json["error"]["details"]["author"][0], "No author field selected");
}

#[sqlx::test]
async fn test_search_nothing_to_search_is_rejected(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .get("/api/search")
        .add_query_param("text", "   ")
        .add_query_param("in_title", "on")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["details"]["__all__"][0], "Nothing to search");
}
