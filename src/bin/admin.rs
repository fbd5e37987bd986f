//! CLI administration tool for shortlink.
//!
//! Provides commands for inspecting links and files, maintaining the shared
//! identifier sequence, and performing database operations without requiring
//! HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Generate a value for ADMIN_PASSKEY
//! cargo run --bin admin -- passkey generate
//!
//! # List the newest links and files
//! cargo run --bin admin -- links --page 1 --page-size 20
//! cargo run --bin admin -- files
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Raise the id sequence above every stored id
//! cargo run --bin admin -- sequence sync
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or the `DB_*` components: PostgreSQL connection

use shortlink::application::services::{AliasRegistry, IdentifierAllocator, ResourceService};
use shortlink::config::DatabaseConfig;
use shortlink::domain::repositories::AliasRepository;
use shortlink::infrastructure::persistence::{
    PgAliasRepository, PgFileAssetRepository, PgIdSequence, PgLinkRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortlink.
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
    /// List links, newest first
    Links(PageArgs),

    /// List file assets, newest first
    Files(PageArgs),

    /// Show statistics
    Stats,

    /// Identifier sequence maintenance
    Sequence {
        #[command(subcommand)]
        action: SequenceAction,
    },

    /// Admin passkey helpers
    Passkey {
        #[command(subcommand)]
        action: PasskeyAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(clap::Args)]
struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Rows per page
    #[arg(long, default_value_t = 20)]
    page_size: u32,
}

impl PageArgs {
    fn offset_limit(&self) -> Result<(i64, i64)> {
        if self.page == 0 || self.page_size == 0 {
            anyhow::bail!("--page and --page-size must be greater than 0");
        }
        let limit = i64::from(self.page_size);
        Ok(((i64::from(self.page) - 1) * limit, limit))
    }
}

/// Sequence subcommands.
#[derive(Subcommand)]
enum SequenceAction {
    /// Move the sequence past the highest stored link or file id
    Sync {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Passkey subcommands.
#[derive(Subcommand)]
enum PasskeyAction {
    /// Print a random passkey suitable for ADMIN_PASSKEY
    Generate,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

type PgResourceService =
    ResourceService<PgLinkRepository, PgFileAssetRepository, PgAliasRepository, PgIdSequence>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Passkey { action } = &cli.command {
        match action {
            PasskeyAction::Generate => println!("{}", generate_passkey()),
        }
        return Ok(());
    }

    let database_url = DatabaseConfig::url_from_env()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Links(args) => list_links(&resource_service(&pool), args).await?,
        Commands::Files(args) => list_files(&resource_service(&pool), args).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Sequence {
            action: SequenceAction::Sync { yes },
        } => sync_sequence(&resource_service(&pool), yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Passkey { .. } => {}
    }

    Ok(())
}

fn resource_service(pool: &PgPool) -> PgResourceService {
    let pool = Arc::new(pool.clone());
    ResourceService::new(
        Arc::new(PgLinkRepository::new(pool.clone())),
        Arc::new(PgFileAssetRepository::new(pool.clone())),
        AliasRegistry::new(Arc::new(PgAliasRepository::new(pool.clone()))),
        IdentifierAllocator::new(Arc::new(PgIdSequence::new(pool))),
    )
}

/// Lists links as a table.
///
/// # Output Format
///
/// ```text
/// 🔗 Links
///
///   ID      Key             Visits   Created           Target
///   ───────────────────────────────────────────────────────────────
///   1042    promo           17       2026-01-15 10:30  https://example.com/
/// ```
async fn list_links(service: &PgResourceService, args: PageArgs) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let (offset, limit) = args.offset_limit()?;
    let page = service
        .list_links(offset, limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if page.items.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<15} {:<8} {:<17} {}",
        "ID".bright_white().bold(),
        "Key".bright_white().bold(),
        "Visits".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &page.items {
        println!(
            "  {:<8} {:<15} {:<8} {:<17} {}",
            link.id.to_string().bright_black(),
            link.public_key().cyan(),
            link.visit_count,
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        page.items.len(),
        page.total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Lists file assets as a table.
async fn list_files(service: &PgResourceService, args: PageArgs) -> Result<()> {
    println!("{}", "📁 Files".bright_blue().bold());
    println!();

    let (offset, limit) = args.offset_limit()?;
    let page = service
        .list_files(offset, limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list files: {}", e))?;

    if page.items.is_empty() {
        println!("{}", "  No files found".yellow());
        return Ok(());
    }

    println!(
        "  {:<8} {:<15} {:<10} {:<12} {}",
        "ID".bright_white().bold(),
        "Key".bright_white().bold(),
        "Downloads".bright_white().bold(),
        "Size".bright_white().bold(),
        "Name".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for file in &page.items {
        println!(
            "  {:<8} {:<15} {:<10} {:<12} {}",
            file.id.to_string().bright_black(),
            file.public_key().cyan(),
            file.download_count,
            file.size_bytes,
            file.file_name
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        page.items.len(),
        page.total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows resource counts, held aliases, and total visits and downloads.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (links_count, visits): (i64, i64) =
        sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(visit_count), 0)::bigint FROM links")
            .fetch_one(pool)
            .await?;

    let (files_count, downloads): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COALESCE(SUM(download_count), 0)::bigint FROM file_assets",
    )
    .fetch_one(pool)
    .await?;

    let aliases_count = PgAliasRepository::new(Arc::new(pool.clone()))
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count aliases: {}", e))?;

    println!(
        "  Links:     {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Files:     {}",
        files_count.to_string().bright_green().bold()
    );
    println!(
        "  Aliases:   {}",
        aliases_count.to_string().bright_green().bold()
    );
    println!("  Visits:    {}", visits.to_string().bright_green().bold());
    println!(
        "  Downloads: {}",
        downloads.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Reconciles the identifier sequence with stored ids.
///
/// Must not race live allocations; run it while the server is stopped or
/// idle.
async fn sync_sequence(service: &PgResourceService, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔄 Sync Identifier Sequence".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Run while no server is creating resources. Continue?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let last = service
        .reconcile_sequence()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to sync sequence: {}", e))?;

    println!(
        "{} next id will be greater than {}",
        "✅ Sequence synced:".green().bold(),
        last.to_string().bright_white().bold()
    );
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

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates a cryptographically random passkey.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_passkey() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSKEY_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..PASSKEY_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
