//! CLI administration tool for the blog.
//!
//! Manages categories, lists tags, shows content counts and runs database
//! diagnostics without going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # Create a category
//! cargo run --bin admin -- category create "Travel"
//!
//! # List categories
//! cargo run --bin admin -- category list
//!
//! # Delete a category (its articles become uncategorized)
//! cargo run --bin admin -- category delete Travel
//!
//! # List tags
//! cargo run --bin admin -- tag list
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
//! Reads the same database settings as the server: `DATABASE_URL`, or the
//! `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` parts, optionally
//! from `.env`.

use blog::config::Config;
use blog::domain::entities::NewCategory;
use blog::domain::repositories::{CategoryRepository, TagRepository};
use blog::infrastructure::persistence::{PgCategoryRepository, PgTagRepository};
use blog::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the blog.
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
    /// Manage article categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Inspect tags
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Show content counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// Create a category
    Create {
        /// Category name (prompted if omitted)
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List all categories
    List,

    /// Delete a category by name or ID
    Delete {
        /// Category name or numeric ID
        name_or_id: String,
    },
}

#[derive(Subcommand)]
enum TagAction {
    /// List all tags
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Category { action } => handle_category_action(action, &pool).await?,
        Commands::Tag { action } => handle_tag_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_category_action(action: CategoryAction, pool: &PgPool) -> Result<()> {
    let repo = PgCategoryRepository::new(Arc::new(pool.clone()));

    match action {
        CategoryAction::Create { name, yes } => create_category(&repo, name, yes).await?,
        CategoryAction::List => list_categories(&repo).await?,
        CategoryAction::Delete { name_or_id } => delete_category(&repo, name_or_id).await?,
    }

    Ok(())
}

/// Creates a category, prompting for the name when it was not given.
///
/// Names are trimmed; blank and duplicate names are refused.
async fn create_category(
    repo: &PgCategoryRepository,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📁 Create Category".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Category name").interact_text()?,
    };
    let name = name.trim().to_string();

    if name.is_empty() {
        anyhow::bail!("Category name must not be empty");
    }

    if repo
        .find_by_name(&name)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .is_some()
    {
        println!("{}", format!("⚠️  Category '{name}' already exists").yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Create category '{name}'?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let category = repo
        .create(NewCategory { name })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create category: {}", e))?;

    println!();
    println!(
        "{} {} (ID {})",
        "✅ Category created:".green().bold(),
        category.name.cyan(),
        category.id
    );
    println!();

    Ok(())
}

/// Lists categories by name.
///
/// # Output Format
///
/// ```text
/// 📋 Categories
///
///   ID  Name                           Created
///   ────────────────────────────────────────────────────────
///   1   General                        2025-01-01 10:30
/// ```
async fn list_categories(repo: &PgCategoryRepository) -> Result<()> {
    println!("{}", "📋 Categories".bright_blue().bold());
    println!();

    let categories = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list categories: {}", e))?;

    if categories.is_empty() {
        println!("{}", "  No categories found".yellow());
        println!();
        println!(
            "  Create one with: {} admin category create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(56).bright_black());

    for category in &categories {
        println!(
            "  {:<3} {:<30} {}",
            category.id.to_string().bright_black(),
            category.name.cyan(),
            category
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        categories.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a category by name or ID after confirmation (default: No).
async fn delete_category(repo: &PgCategoryRepository, name_or_id: String) -> Result<()> {
    println!("{}", "🗑️  Delete Category".bright_blue().bold());
    println!();

    let category = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let category = category.context("Category not found")?;

    println!("  Category: {}", category.name.cyan());
    println!("  ID:       {}", category.id.to_string().bright_black());
    println!();
    println!(
        "{}",
        "⚠️  Articles in this category will become uncategorized.".yellow()
    );

    let confirmed = Confirm::new()
        .with_prompt("Delete this category?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.delete(category.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete category: {}", e))?;

    println!();
    println!("{}", "✅ Category deleted".green().bold());
    println!();

    Ok(())
}

async fn handle_tag_action(action: TagAction, pool: &PgPool) -> Result<()> {
    let repo = PgTagRepository::new(Arc::new(pool.clone()));

    match action {
        TagAction::List => {
            println!("{}", "🏷️  Tags".bright_blue().bold());
            println!();

            let tags = repo
                .list()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list tags: {}", e))?;

            if tags.is_empty() {
                println!("{}", "  No tags found".yellow());
                return Ok(());
            }

            for tag in &tags {
                println!(
                    "  {:<5} {}",
                    tag.id.to_string().bright_black(),
                    tag.name.cyan()
                );
            }

            println!();
            println!("  Total: {}", tags.len().to_string().bright_white().bold());
            println!();
        }
    }

    Ok(())
}

/// Displays article, comment, tag and category counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for (label, table) in [
        ("Articles:  ", "articles"),
        ("Comments:  ", "comments"),
        ("Tags:      ", "tags"),
        ("Categories:", "categories"),
    ] {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;

        println!("  {label} {}", count.to_string().bright_green().bold());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
            .fetch_one(pool)
            .await
            .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
