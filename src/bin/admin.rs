//! CLI administration tool for kv-shortener.
//!
//! Talks to the configured key-value store directly, using the same link
//! service as the HTTP server, so links can be created and inspected without
//! the API password or a running server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (honours UNIQUE_LINK unless --no-dedup is given)
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Look up a key
//! cargo run --bin admin -- resolve AbC234
//!
//! # Check the store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `REDIS_URL` (or `REDIS_HOST` etc.), `REDIS_KEY_PREFIX`,
//! `UNIQUE_LINK`, `KEY_LENGTH`, `KEY_MAX_ATTEMPTS`, `STORE_TIMEOUT_SECONDS`.
//! Without Redis the in-memory store is used, which is only useful for a dry run.

use kv_shortener::config::{self, Config};
use kv_shortener::server::build_link_service;
use kv_shortener::utils::url_validator::is_valid_url;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

/// CLI tool for managing kv-shortener links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short key for a URL
    Shorten {
        /// Target URL (absolute http/https)
        url: String,

        /// Always allocate a new key, even if the URL was shortened before
        #[arg(long)]
        no_dedup: bool,
    },

    /// Show the target URL of a key
    Resolve {
        /// Short key, with or without the leading slash
        key: String,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check the store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    if config.redis_url.is_none() {
        println!(
            "{}",
            "REDIS_URL is not set; using an in-memory store, nothing will persist.".yellow()
        );
    }

    match cli.command {
        Commands::Shorten { url, no_dedup } => shorten(&config, &url, !no_dedup).await?,
        Commands::Resolve { key } => resolve(&config, &key).await?,
        Commands::Store { action } => match action {
            StoreAction::Check => check_store(&config).await?,
        },
    }

    Ok(())
}

/// Validates and stores a URL, printing the resulting key.
async fn shorten(config: &Config, url: &str, dedup_requested: bool) -> Result<()> {
    if !is_valid_url(url) {
        anyhow::bail!("Invalid URL: {url}");
    }

    let service = build_link_service(config).await?;
    let dedup = dedup_requested && config.dedup_enabled;

    let key = service.save_url(url, dedup).await?;

    println!("{}", "Link stored".green().bold());
    println!("  Key:    {}", format!("/{key}").bright_yellow().bold());
    println!("  Target: {}", url.cyan());
    println!("  Dedup:  {}", if dedup { "on" } else { "off" });

    Ok(())
}

/// Prints the target of a key, or reports that it is unknown.
async fn resolve(config: &Config, key: &str) -> Result<()> {
    let key = key.trim_start_matches('/');
    let service = build_link_service(config).await?;

    match service.resolve(key).await? {
        Some(target) => {
            println!("{} -> {}", format!("/{key}").bright_yellow(), target.cyan());
        }
        None => {
            println!(
                "{} {}",
                format!("/{key}").bright_yellow(),
                "not found (requests are redirected to the default URL)".red()
            );
        }
    }

    Ok(())
}

/// Pings the configured store.
async fn check_store(config: &Config) -> Result<()> {
    print!("Checking store... ");

    let service = build_link_service(config).await?;
    service.ping_store().await?;

    println!("{}", "OK".green().bold());
    Ok(())
}
