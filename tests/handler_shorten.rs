mod common;

use axum::http::StatusCode;
use serde_json::json;
use shortly::infrastructure::cache::{CacheMapping, CacheService};

#[tokio::test]
async fn test_shorten_creates_record() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "user_id": 1 }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let code = json["short_url"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    let rows = app.repo.rows().await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].short_code, code);
    assert_eq!(rows[0].original_url, "https://example.com");
    assert_eq!(rows[0].user_id, 1);
}

#[tokio::test]
async fn test_shorten_populates_url_cache() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "https://cached.example", "user_id": 1 }))
        .await;

    let code = response.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();

    let cached = app
        .cache
        .get(CacheMapping::UrlToCode, "https://cached.example")
        .await
        .unwrap();
    assert_eq!(cached, Some(code));
}

#[tokio::test]
async fn test_shorten_same_url_returns_cached_code() {
    let app = common::create_test_app();

    let first = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "https://dedup.com", "user_id": 1 }))
        .await;
    first.assert_status(StatusCode::CREATED);
    let code1 = first.json::<serde_json::Value>()["short_url"].clone();

    // A different user still gets the cached code.
    let second = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "https://dedup.com", "user_id": 2 }))
        .await;
    second.assert_status_ok();
    let code2 = second.json::<serde_json::Value>()["short_url"].clone();

    assert_eq!(code1, code2);
    assert_eq!(app.repo.rows().await.len(), 1);
    assert_eq!(app.repo.insert_attempts(), 1);
}

#[tokio::test]
async fn test_shorten_accepts_string_user_id() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/s", "user_id": "2" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(app.repo.rows().await[0].user_id, 2);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/shorten")
        .json(&json!({ "user_id": 1 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Missing URL or user_id" })
    );
    assert_eq!(app.repo.insert_attempts(), 0);
}

#[tokio::test]
async fn test_shorten_missing_user_id() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(app.repo.insert_attempts(), 0);
}

#[tokio::test]
async fn test_shorten_empty_fields() {
    let app = common::create_test_app();

    for body in [
        json!({ "url": "", "user_id": 1 }),
        json!({ "url": "https://example.com", "user_id": "" }),
        json!({ "url": "https://example.com", "user_id": 0 }),
    ] {
        let response = app.server.post("/shorten").json(&body).await;
        response.assert_status_bad_request();
    }

    assert!(app.repo.rows().await.is_empty());
}

#[tokio::test]
async fn test_shorten_rejects_non_json_body() {
    let app = common::create_test_app();

    let response = app.server.post("/shorten").text("url=https://example.com").await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
    assert_eq!(app.repo.insert_attempts(), 0);
}

#[tokio::test]
async fn test_shorten_unknown_user_is_server_error() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "user_id": 99 }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Internal server error" })
    );

    // Nothing was cached for the failed insert.
    let cached = app
        .cache
        .get(CacheMapping::UrlToCode, "https://example.com")
        .await
        .unwrap();
    assert!(cached.is_none());
}

#[tokio::test]
async fn test_shorten_store_down_is_server_error() {
    let server = common::create_unavailable_app();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "user_id": 1 }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_shorten_user_id_shapes() {
    let app = common::create_test_app();

    let response = app
        .server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/float", "user_id": 1.0 }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(app.repo.rows().await[0].user_id, 1);

    for user_id in [json!(true), json!(2.5), json!({ "id": 1 })] {
        let response = app
            .server
            .post("/shorten")
            .json(&json!({ "url": "https://example.com/odd", "user_id": user_id }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({ "error": "Missing URL or user_id" })
        );
    }
    assert_eq!(app.repo.insert_attempts(), 1);
}
