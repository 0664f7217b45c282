mod common;

use axum::body::{Body, to_bytes};
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use blog::config::{Config, LogFormat, PageConfig, PoolConfig, RateLimitConfig};
use blog::routes::app_router;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceExt;

fn test_config(burst: u32) -> Config {
    Config {
        database_url: "postgres://localhost/test".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: LogFormat::Text,
        static_dir: "static".to_string(),
        articles: PageConfig {
            per_page: 3,
            orphans: 1,
        },
        comments: PageConfig {
            per_page: 3,
            orphans: 0,
        },
        rate_limit: RateLimitConfig {
            per_second: 60,
            burst,
        },
        pool: PoolConfig {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            max_lifetime: Duration::from_secs(300),
        },
    }
}

fn get(uri: &str) -> Request<Body> {
    let addr: SocketAddr = "127.0.0.1:40000".parse().unwrap();
    let mut request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[sqlx::test]
async fn test_trailing_slash_is_normalized(pool: PgPool) {
    let app = app_router(common::create_test_state(pool), &test_config(20));

    let response = app.oneshot(get("/comments/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test]
async fn test_health_and_api_are_mounted(pool: PgPool) {
    let app = app_router(common::create_test_state(pool), &test_config(20));

    let health = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);

    let tags = app.oneshot(get("/api/tags")).await.unwrap();
    assert_eq!(tags.status(), StatusCode::OK);
    assert_eq!(body_text(tags).await, "[]");
}

#[sqlx::test]
async fn test_static_assets_are_served(pool: PgPool) {
    let app = app_router(common::create_test_state(pool), &test_config(20));

    let response = app.oneshot(get("/static/style.css")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test]
async fn test_unknown_path_renders_html_not_found(pool: PgPool) {
    let app = app_router(common::create_test_state(pool), &test_config(20));

    let response = app.oneshot(get("/no/such/page")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("<html"));
}

#[sqlx::test]
async fn test_form_routes_are_rate_limited_per_ip(pool: PgPool) {
    let app = app_router(common::create_test_state(pool), &test_config(2));

    for _ in 0..2 {
        let response = app.clone().oneshot(get("/articles/add")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let limited = app.clone().oneshot(get("/articles/add")).await.unwrap();
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);

    // Read-only pages are not limited.
    let index = app.oneshot(get("/")).await.unwrap();
    assert_eq!(index.status(), StatusCode::OK);
}
