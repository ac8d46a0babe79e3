#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use shortly::application::services::UrlService;
use shortly::domain::entities::{NewShortUrl, ShortUrl};
use shortly::domain::repositories::UrlRepository;
use shortly::error::AppError;
use shortly::infrastructure::cache::{CacheService, MemoryCache};
use shortly::infrastructure::metrics::Metrics;
use shortly::routes::router;
use shortly::state::AppState;

/// In-memory stand-in for the `urls` table, enforcing the unique short code
/// and the foreign key to known users.
pub struct InMemoryUrlRepository {
    rows: Mutex<Vec<ShortUrl>>,
    users: HashSet<i64>,
    inserts: AtomicUsize,
}

impl InMemoryUrlRepository {
    pub fn with_users(users: &[i64]) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            users: users.iter().copied().collect(),
            inserts: AtomicUsize::new(0),
        }
    }

    pub async fn rows(&self) -> Vec<ShortUrl> {
        self.rows.lock().await.clone()
    }

    pub fn insert_attempts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub async fn seed(&self, short_code: &str, original_url: &str, user_id: i64) {
        let mut rows = self.rows.lock().await;
        let id = rows.len() as i64 + 1;
        rows.push(ShortUrl::new(
            id,
            short_code.to_string(),
            original_url.to_string(),
            user_id,
            Utc::now(),
        ));
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().await;

        if rows.iter().any(|r| r.short_code == new_url.short_code) {
            return Err(AppError::store("duplicate key value violates unique constraint"));
        }
        if !self.users.contains(&new_url.user_id) {
            return Err(AppError::store("violates foreign key constraint"));
        }

        let row = ShortUrl::new(
            rows.len() as i64 + 1,
            new_url.short_code,
            new_url.original_url,
            new_url.user_id,
            Utc::now(),
        );
        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|r| r.short_code == short_code).cloned())
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ShortUrl>, AppError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().filter(|r| r.user_id == user_id).cloned().collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().await.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// A store that is always down.
pub struct UnavailableUrlRepository;

#[async_trait]
impl UrlRepository for UnavailableUrlRepository {
    async fn create(&self, _new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn find_by_short_code(&self, _short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn list_by_user(&self, _user_id: i64) -> Result<Vec<ShortUrl>, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::store("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::store("connection refused"))
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<InMemoryUrlRepository>,
    pub cache: Arc<MemoryCache>,
    pub metrics: Arc<Metrics>,
    pub service: Arc<UrlService>,
}

pub fn create_test_state(
    repo: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
) -> (AppState, Arc<Metrics>, Arc<UrlService>) {
    let metrics = Arc::new(Metrics::new().unwrap());
    let service = Arc::new(UrlService::new(repo, cache, metrics.clone()));
    let state = AppState::new(service.clone(), metrics.clone());
    (state, metrics, service)
}

/// Full router over an in-memory store that knows users 1 and 2.
pub fn create_test_app() -> TestApp {
    let repo = Arc::new(InMemoryUrlRepository::with_users(&[1, 2]));
    let cache = Arc::new(MemoryCache::default());
    let (state, metrics, service) = create_test_state(repo.clone(), cache.clone());

    TestApp {
        server: TestServer::new(router(state)).unwrap(),
        repo,
        cache,
        metrics,
        service,
    }
}

/// Full router over a store that fails every call.
pub fn create_unavailable_app() -> TestServer {
    let (state, _, _) = create_test_state(
        Arc::new(UnavailableUrlRepository),
        Arc::new(MemoryCache::default()),
    );
    TestServer::new(router(state)).unwrap()
}

/// Inserts a user row directly and returns its id.
pub async fn create_test_user(pool: &sqlx::PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO users DEFAULT VALUES RETURNING id")
        .fetch_one(pool)
        .await
        .unwrap()
}
