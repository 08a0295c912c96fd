//! CLI administration tool for go links.
//!
//! Reads and edits the link data file directly, without going through the
//! HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Show where a shortcut points
//! cargo run --bin admin -- get gh
//!
//! # Add a link (prompts for anything missing)
//! cargo run --bin admin -- add gh github.com
//!
//! # Use another data file
//! cargo run --bin admin -- --data-file ./links.json list
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_FILE` (optional): link data file, overridden by `--data-file`
//!
//! A running server keeps its own copy of the links in memory. Links added
//! here are picked up on the server's next start, and the server's next save
//! overwrites them.

use golinks::application::services::LinkService;
use golinks::config::Config;
use golinks::domain::repositories::LinkRepository;
use golinks::infrastructure::persistence::JsonLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing go links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Link data file (defaults to `DATA_FILE` or /app/data/links.json)
    #[arg(short, long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Link management commands.
#[derive(Subcommand)]
enum Commands {
    /// List all links
    List,

    /// Show the destination of a shortcut
    Get {
        /// Shortcut to look up
        shortcut: String,
    },

    /// Add a link, or replace an existing shortcut's destination
    Add {
        /// Shortcut (prompted for if omitted)
        shortcut: Option<String>,

        /// Destination URL; `http://` is added when no scheme is given
        url: Option<String>,

        /// Skip the overwrite confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let data_file = cli
        .data_file
        .unwrap_or_else(|| Config::from_env().data_file);

    let repo = Arc::new(JsonLinkRepository::new(&data_file));
    repo.load()
        .await
        .with_context(|| format!("Failed to load {}", data_file.display()))?;

    match cli.command {
        Commands::List => list_links(repo).await?,
        Commands::Get { shortcut } => get_link(repo, &shortcut).await?,
        Commands::Add { shortcut, url, yes } => add_link(repo, shortcut, url, yes).await?,
    }

    Ok(())
}

/// Lists all links, ordered by shortcut.
///
/// # Output Format
///
/// ```text
/// Go Links (/app/data/links.json)
///
///   Shortcut             URL
///   ----------------------------------------------------------------
///   gh                   https://github.com
/// ```
async fn list_links(repo: Arc<JsonLinkRepository>) -> Result<()> {
    println!(
        "{} ({})",
        "Go Links".bright_blue().bold(),
        repo.path().display()
    );
    println!();

    let service = LinkService::new(repo);
    let links = service.list_links().await;

    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        println!(
            "  Add one with: {} admin add <shortcut> <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {}",
        "Shortcut".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(64).bright_black());

    for link in &links {
        println!("  {:<20} {}", link.shortcut.cyan(), link.url);
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}

/// Prints the destination of a single shortcut.
async fn get_link(repo: Arc<JsonLinkRepository>, shortcut: &str) -> Result<()> {
    match repo.get(shortcut).await {
        Some(url) => println!("go/{} -> {}", shortcut.cyan(), url),
        None => anyhow::bail!("No link named '{}'", shortcut),
    }

    Ok(())
}

/// Adds a link with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for shortcut and URL (or use provided)
/// 2. Confirm overwriting an existing shortcut (unless `--yes` flag)
/// 3. Validate, normalize and save through [`LinkService`]
async fn add_link(
    repo: Arc<JsonLinkRepository>,
    shortcut: Option<String>,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    let shortcut = match shortcut {
        Some(s) => s,
        None => Input::new().with_prompt("Shortcut").interact_text()?,
    };

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    if let Some(existing) = repo.get(shortcut.trim()).await
        && !skip_confirm
    {
        println!(
            "{} go/{} already points to {}",
            "!".yellow().bold(),
            shortcut.trim().cyan(),
            existing
        );

        let confirmed = Confirm::new()
            .with_prompt("Replace it?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let service = LinkService::new(repo);
    let link = service
        .add_link(&shortcut, &url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add link: {}", e))?;

    println!(
        "{} go/{} -> {}",
        "Saved".green().bold(),
        link.shortcut.cyan(),
        link.url
    );

    Ok(())
}
