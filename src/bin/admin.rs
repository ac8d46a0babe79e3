//! CLI administration tool for shortly.
//!
//! The HTTP API never creates users; this tool is how users come and go.
//!
//! # Usage
//!
//! ```bash
//! # Create a user
//! cargo run --bin admin -- user create
//!
//! # List users with their URL counts
//! cargo run --bin admin -- user list
//!
//! # Show the URLs owned by a user
//! cargo run --bin admin -- user urls 1
//!
//! # Delete a user and its URLs
//! cargo run --bin admin -- user delete 1
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use shortly::domain::repositories::{UrlRepository, UserRepository};
use shortly::infrastructure::persistence::{PgUrlRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortly.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create,

    /// List all users
    List,

    /// List the URLs owned by a user
    Urls {
        /// User ID
        id: i64,
    },

    /// Delete a user and, by cascade, all of its URLs
    Delete {
        /// User ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = shortly::config::Config::from_env()?;
    let pool = shortly::server::connect_database(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let users = PgUserRepository::new(pool.clone());

    match action {
        UserAction::Create => create_user(&users).await?,
        UserAction::List => list_users(&users).await?,
        UserAction::Urls { id } => {
            let urls = PgUrlRepository::new(pool);
            list_user_urls(&users, &urls, id).await?
        }
        UserAction::Delete { id, yes } => delete_user(&users, id, yes).await?,
    }

    Ok(())
}

async fn create_user(users: &PgUserRepository) -> Result<()> {
    let user = users
        .create()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!("{}", "✅ User created".green().bold());
    println!("  ID: {}", user.id.to_string().bright_yellow().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -X POST -H 'Content-Type: application/json' \\\n    -d '{{\"url\":\"https://example.com\",\"user_id\":{}}}' http://localhost:3000/shorten",
        user.id
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 👥 Users
///
///   ID     Created              URLs
///   ──────────────────────────────────
///   1      2024-01-15 10:30     12
/// ```
async fn list_users(users: &PgUserRepository) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let list = users
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if list.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<6} {:<20} {}",
        "ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "URLs".bright_white().bold()
    );
    println!("  {}", "─".repeat(34).bright_black());

    for user in &list {
        println!(
            "  {:<6} {:<20} {}",
            user.id.to_string().cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            user.url_count
        );
    }

    println!();
    println!("  Total: {}", list.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn list_user_urls(users: &PgUserRepository, urls: &PgUrlRepository, id: i64) -> Result<()> {
    users
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!(
        "{}",
        format!("🔗 URLs of user {}", id).bright_blue().bold()
    );
    println!();

    let list = urls
        .list_by_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    if list.is_empty() {
        println!("{}", "  No URLs yet".yellow());
        println!();
        return Ok(());
    }

    for url in &list {
        println!(
            "  {:<8} {:<18} {}",
            url.short_code.bright_yellow(),
            url.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            url.original_url
        );
    }

    println!();
    println!("  Total: {}", list.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a user after confirmation (default: No).
async fn delete_user(users: &PgUserRepository, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete user".bright_blue().bold());
    println!();

    users
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("  User: {}", id.to_string().cyan());
    println!(
        "{}",
        "⚠️  All URLs owned by this user are deleted too. Cached mappings keep resolving until they expire or are evicted."
            .yellow()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = users
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    if deleted {
        println!("{}", "✅ User deleted".green().bold());
    } else {
        println!("{}", "⚠️  User was already gone".yellow());
    }
    println!();

    Ok(())
}

/// Displays system statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let users_count = PgUserRepository::new(pool.clone())
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;
    let urls_count = PgUrlRepository::new(pool)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;

    println!(
        "  Users: {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  URLs:  {}",
        urls_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            PgUrlRepository::new(Arc::new(pool.clone()))
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Schema up to date".green().bold());
        }
    }

    Ok(())
}
