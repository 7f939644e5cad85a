//! CLI administration tool for registry-redirect.
//!
//! Inspects the region routing table and checks blobs against buckets
//! without going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Which bucket serves a region
//! cargo run --bin admin -- region resolve ca-central-1
//!
//! # Print every bucket with the regions routed to it
//! cargo run --bin admin -- region list
//!
//! # Check whether a layer is present in the bucket for a region
//! cargo run --bin admin -- blob check <sha256-hex> --region eu-west-3
//! ```
//!
//! # Environment Variables
//!
//! - `PROBE_TIMEOUT_SECONDS` (optional): timeout of a blob check, 1 to 60
//!   seconds (default: 5)
//!
//! The rest of the server configuration is validated too, so a `.env` the
//! server would refuse is refused here as well.

use registry_redirect::config;
use registry_redirect::domain::blob::blob_url;
use registry_redirect::domain::region::{GLOBAL_REGION, buckets, known_regions, resolve_endpoint};
use registry_redirect::infrastructure::blob_check::{BlobChecker, CachedBlobChecker, HttpProbe};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting registry-redirect routing.
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
    /// Inspect region routing
    Region {
        #[command(subcommand)]
        action: RegionAction,
    },

    /// Check blobs in buckets
    Blob {
        #[command(subcommand)]
        action: BlobAction,
    },
}

/// Region routing subcommands.
#[derive(Subcommand)]
enum RegionAction {
    /// Show the bucket endpoint for a region
    Resolve {
        /// Region identifier (e.g., "us-east-2", "GLOBAL")
        region: String,
    },

    /// List all buckets and their routed regions
    List,
}

/// Blob subcommands.
#[derive(Subcommand)]
enum BlobAction {
    /// Probe a bucket for a layer
    Check {
        /// Layer digest as hex, with or without the "sha256:" prefix
        hash: String,

        /// Client region used to pick the bucket
        #[arg(short, long, default_value = GLOBAL_REGION)]
        region: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Region { action } => handle_region_action(action),
        Commands::Blob { action } => handle_blob_action(action).await?,
    }

    Ok(())
}

/// Dispatches region routing commands.
fn handle_region_action(action: RegionAction) {
    match action {
        RegionAction::Resolve { region } => resolve_region(&region),
        RegionAction::List => list_buckets(),
    }
}

fn resolve_region(region: &str) {
    match resolve_endpoint(region) {
        Some(endpoint) => {
            println!("{} {}", region.bright_white().bold(), "→".bright_black());
            println!("  {}", endpoint.green());
        }
        None => {
            println!(
                "{}",
                format!("⚠️  No bucket for region '{}'", region).yellow()
            );
            println!(
                "{}",
                "   Requests from this region are redirected upstream.".bright_black()
            );
        }
    }
}

fn list_buckets() {
    println!("{}", "🪣 Buckets".bright_blue().bold());
    println!();

    for (i, group) in buckets().iter().enumerate() {
        let label = if i == 0 {
            format!("{} (default)", group.bucket_region)
        } else {
            group.bucket_region.to_string()
        };
        println!("{}", label.bright_white().bold());
        println!("  {}", group.endpoint.bright_black());
        println!("  {}", group.regions.join(", ").cyan());
        println!();
    }

    println!(
        "{} regions routed to {} buckets",
        known_regions().count().to_string().bright_white(),
        buckets().len().to_string().bright_white()
    );
}

/// Dispatches blob commands.
async fn handle_blob_action(action: BlobAction) -> Result<()> {
    match action {
        BlobAction::Check { hash, region } => check_blob(&hash, &region).await,
    }
}

async fn check_blob(hash: &str, region: &str) -> Result<()> {
    let layer_hash = hash.strip_prefix("sha256:").unwrap_or(hash);

    let Some(endpoint) = resolve_endpoint(region) else {
        anyhow::bail!("no bucket for region '{}'", region);
    };

    let config = config::load_from_env().context("Invalid configuration")?;
    let probe = HttpProbe::new(config.probe_timeout()).context("Failed to build HTTP client")?;
    let checker = CachedBlobChecker::new(probe);

    let url = blob_url(endpoint, layer_hash);
    println!("{} {}", "Probing".bright_blue(), url.bright_black());

    if checker.blob_exists(&url, endpoint, layer_hash).await {
        println!("{}", "✓ Blob exists".green().bold());
    } else {
        println!("{}", "✗ Blob not available (missing or unreachable)".red().bold());
    }

    Ok(())
}
