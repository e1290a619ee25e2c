//! Tiffin CLI - Snapshot seeding and operator management tools.
//!
//! # Usage
//!
//! ```bash
//! # Write a starter snapshot with sample categories and menu items
//! tiffin seed
//!
//! # Grant the admin flag to an existing user
//! tiffin admin grant -e owner@example.com
//! tiffin admin grant -s "provider|abc123"
//!
//! # List the user directory
//! tiffin admin list
//! ```
//!
//! # Environment Variables
//!
//! - `TIFFIN_STORE_PATH` - Path of the JSON snapshot file
//!   (default `tiffin-store.json`)
//!
//! # Commands
//!
//! - `seed` - Write a starter snapshot
//! - `admin grant` - Grant the admin flag by email or subject
//! - `admin list` - List the user directory

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tiffin")]
#[command(author, version, about = "Tiffin CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter snapshot with sample catalog data
    Seed {
        /// Overwrite an existing snapshot
        #[arg(long)]
        force: bool,
    },
    /// Manage the user directory
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Grant the admin flag to an existing user
    Grant {
        /// The user's email address
        #[arg(short, long)]
        email: Option<String>,

        /// The user's identity provider subject
        #[arg(short, long)]
        subject: Option<String>,
    },
    /// List every user in the directory
    List,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::starter_snapshot(force).await?,
        Commands::Admin { action } => match action {
            AdminAction::Grant { email, subject } => {
                commands::admin::grant(email.as_deref(), subject.as_deref()).await?;
            }
            AdminAction::List => commands::admin::list().await?,
        },
    }
    Ok(())
}
