mod common;

use sqlx::PgPool;
use std::sync::Arc;
use shortly::domain::entities::NewShortUrl;
use shortly::domain::repositories::UrlRepository;
use shortly::error::AppError;
use shortly::infrastructure::persistence::PgUrlRepository;

fn new_url(code: &str, url: &str, user_id: i64) -> NewShortUrl {
    NewShortUrl {
        short_code: code.to_string(),
        original_url: url.to_string(),
        user_id,
    }
}

#[sqlx::test]
async fn test_create_url(pool: PgPool) {
    let user_id = common::create_test_user(&pool).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let url = repo
        .create(new_url("test12", "https://example.com", user_id))
        .await
        .unwrap();

    assert_eq!(url.short_code, "test12");
    assert_eq!(url.original_url, "https://example.com");
    assert_eq!(url.user_id, user_id);
}

#[sqlx::test]
async fn test_find_by_short_code(pool: PgPool) {
    let user_id = common::create_test_user(&pool).await;

    sqlx::query("INSERT INTO urls (short_url, original_url, user_id) VALUES ($1, $2, $3)")
        .bind("abc123")
        .bind("https://example.com")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgUrlRepository::new(Arc::new(pool));
    let url = repo.find_by_short_code("abc123").await.unwrap();

    assert_eq!(url.unwrap().original_url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_short_code_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let url = repo.find_by_short_code("nothere").await.unwrap();

    assert!(url.is_none());
}

#[sqlx::test]
async fn test_duplicate_short_code_is_rejected(pool: PgPool) {
    let user_id = common::create_test_user(&pool).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.create(new_url("dup001", "https://first.example", user_id))
        .await
        .unwrap();
    let result = repo
        .create(new_url("dup001", "https://second.example", user_id))
        .await;

    assert!(matches!(result, Err(AppError::Store(_))));
    assert_eq!(repo.count().await.unwrap(), 1);

    // The first record is untouched.
    let kept = repo.find_by_short_code("dup001").await.unwrap().unwrap();
    assert_eq!(kept.original_url, "https://first.example");
}

#[sqlx::test]
async fn test_same_url_may_have_many_codes(pool: PgPool) {
    let user_id = common::create_test_user(&pool).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.create(new_url("same01", "https://example.com", user_id))
        .await
        .unwrap();
    repo.create(new_url("same02", "https://example.com", user_id))
        .await
        .unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_unknown_user_is_rejected(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo
        .create(new_url("orphan", "https://example.com", 999_999))
        .await;

    assert!(matches!(result, Err(AppError::Store(_))));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_list_by_user(pool: PgPool) {
    let alice = common::create_test_user(&pool).await;
    let bob = common::create_test_user(&pool).await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.create(new_url("alice1", "https://a.example/1", alice))
        .await
        .unwrap();
    repo.create(new_url("alice2", "https://a.example/2", alice))
        .await
        .unwrap();
    repo.create(new_url("bob001", "https://b.example", bob))
        .await
        .unwrap();

    let urls = repo.list_by_user(alice).await.unwrap();

    assert_eq!(urls.len(), 2);
    // Newest first.
    assert_eq!(urls[0].short_code, "alice2");
    assert!(urls.iter().all(|u| u.user_id == alice));
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
