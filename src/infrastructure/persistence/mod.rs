//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! parameterized queries.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Short URL storage and retrieval
//! - [`PgUserRepository`] - User management

pub mod pg_url_repository;
pub mod pg_user_repository;

pub use pg_url_repository::PgUrlRepository;
pub use pg_user_repository::PgUserRepository;
