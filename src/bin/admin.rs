//! CLI administration tool for shortlink.
//!
//! Talks to the configured link store directly, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link (prompts for the URL when omitted)
//! cargo run --bin admin -- link create https://example.com --ttl 600
//!
//! # Look up a code
//! cargo run --bin admin -- link resolve aB3xY9zQ
//!
//! # Check whether a code is taken
//! cargo run --bin admin -- link exists aB3xY9zQ
//!
//! # Check store connectivity
//! cargo run --bin admin -- store ping
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `shortlink::config`.

use shortlink::application::services::{LinkAllocator, RedirectResolver};
use shortlink::config;
use shortlink::domain::repositories::LinkStore;
use shortlink::domain::{Deadline, LinkError};
use shortlink::server::build_store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;
use std::time::Duration;

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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Short link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// Target URL (prompted for when omitted)
        url: Option<String>,

        /// Lifetime in seconds (defaults to DEFAULT_TTL_SECONDS)
        #[arg(long)]
        ttl: Option<u64>,

        /// Allocation attempts (defaults to SHORTEN_RETRY_BUDGET)
        #[arg(long)]
        retries: Option<u32>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the URL behind a code
    Resolve {
        code: String,
    },

    /// Report whether a code is currently taken
    Exists {
        code: String,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connectivity
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let store = build_store(&config).await?;
    let deadline = || Deadline::after(config.request_timeout);

    match cli.command {
        Commands::Link { action } => match action {
            LinkAction::Create {
                url,
                ttl,
                retries,
                yes,
            } => {
                let allocator = LinkAllocator::new(store, config.code_length);
                let ttl = ttl.filter(|t| *t > 0).unwrap_or(config.default_ttl_seconds);
                let retries = retries.unwrap_or(config.retry_budget);
                create_link(&allocator, url, ttl, retries, yes, config.request_timeout).await?;
            }
            LinkAction::Resolve { code } => {
                let resolver = RedirectResolver::new(store);
                resolve_link(&resolver, &code, deadline()).await?;
            }
            LinkAction::Exists { code } => {
                check_exists(store, &code, deadline()).await?;
            }
        },
        Commands::Store {
            action: StoreAction::Ping,
        } => ping_store(store, deadline()).await?,
    }

    Ok(())
}

/// Creates a short link with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the target URL (or use provided)
/// 2. Display link details
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Allocate the code
///
/// The `timeout` clock starts once the prompts have returned.
async fn create_link(
    allocator: &LinkAllocator<dyn LinkStore>,
    url: Option<String>,
    ttl: u64,
    retries: u32,
    skip_confirm: bool,
    timeout: Duration,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let target_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Target URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    println!("{}", "Link details:".bright_white().bold());
    println!("  URL: {}", target_url.cyan());
    println!("  TTL: {}s", ttl.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    allocate_link(allocator, &target_url, ttl, retries, timeout).await
}

/// Allocates a code under a deadline that starts now.
async fn allocate_link(
    allocator: &LinkAllocator<dyn LinkStore>,
    target_url: &str,
    ttl: u64,
    retries: u32,
    timeout: Duration,
) -> Result<()> {
    let deadline = Deadline::after(timeout);

    match allocator.shorten(target_url, ttl, retries, deadline).await {
        Ok(link) => {
            println!("{}", "✅ Short link created!".green().bold());
            println!("  Code:    {}", link.code.to_string().bright_yellow().bold());
            println!(
                "  Expires: {}",
                link.expires_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ {}", describe(&e)).red());
            Err(e.into())
        }
    }
}

/// Prints the URL behind a code.
async fn resolve_link(
    resolver: &RedirectResolver<dyn LinkStore>,
    code: &str,
    deadline: Deadline,
) -> Result<()> {
    match resolver.resolve(code, deadline).await {
        Ok(url) => {
            println!("{} → {}", code.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(LinkError::NotFound) => {
            println!("{}", format!("  {} not found or expired", code).yellow());
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ {}", describe(&e)).red());
            Err(e.into())
        }
    }
}

/// Reports whether a code is taken.
async fn check_exists(store: Arc<dyn LinkStore>, code: &str, deadline: Deadline) -> Result<()> {
    let taken = deadline
        .run(store.exists(code))
        .await
        .map_err(|e| anyhow::anyhow!("Existence check failed: {}", e))?;

    if taken {
        println!("{} {}", code.bright_yellow(), "is taken".red());
    } else {
        println!("{} {}", code.bright_yellow(), "is free".green());
    }

    Ok(())
}

/// Pings the store.
async fn ping_store(store: Arc<dyn LinkStore>, deadline: Deadline) -> Result<()> {
    println!("{}", "🔍 Checking store connection...".bright_blue());

    match deadline.run(store.ping()).await {
        Ok(()) => {
            println!(
                "{}",
                format!("✅ {} store reachable", store.backend_name())
                    .green()
                    .bold()
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ {} store unreachable", store.backend_name()).red());
            Err(anyhow::anyhow!("Ping failed: {}", e))
        }
    }
}

fn describe(err: &LinkError) -> String {
    match err {
        LinkError::Validation(message) => format!("Invalid input: {}", message),
        LinkError::CollisionExhausted { attempts } => {
            format!("No free code after {} attempts; try again", attempts)
        }
        LinkError::NotFound => "Not found".to_string(),
        LinkError::Storage(source) => format!("Store error: {}", source),
    }
}
