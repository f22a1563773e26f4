mod client;
mod commands;
mod config;
mod models;
mod store;
mod views;
mod web;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use client::ActivitiesClient;

/// Mergington High School activities: browse clubs and sign students up.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print debug-level logs
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the activities server
    Serve {
        /// Path to config file (uses the built-in activities when omitted)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Listen address, overrides config (e.g. "0.0.0.0:8000")
        #[arg(short = 'a', long)]
        addr: Option<String>,

        /// Directory served under /static, overrides config
        #[arg(long)]
        static_dir: Option<String>,
    },

    /// Show all activities with their participants
    List {
        /// Server base URL
        #[arg(long, default_value = client::DEFAULT_URL)]
        url: String,
    },

    /// Sign a student up for an activity
    ///
    /// Example:
    ///   signup "Chess Club" ada@mergington.edu
    Signup {
        /// Activity name
        activity: String,

        /// Student email
        email: String,

        /// Server base URL
        #[arg(long, default_value = client::DEFAULT_URL)]
        url: String,
    },

    /// Remove a student from an activity
    Unregister {
        /// Activity name
        activity: String,

        /// Student email
        email: String,

        /// Server base URL
        #[arg(long, default_value = client::DEFAULT_URL)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match &cli.command {
        Command::Serve {
            config,
            addr,
            static_dir,
        } => {
            let mut cfg = config::load_config(config.as_deref())?;
            if let Some(addr) = addr {
                cfg.server.addr = addr.clone();
            }
            if let Some(dir) = static_dir {
                cfg.server.static_dir = dir.clone();
            }
            web::serve(cfg).await?;
        }
        Command::List { url } => {
            let client = ActivitiesClient::new(url)?;
            commands::run_list(&client).await?;
        }
        Command::Signup {
            activity,
            email,
            url,
        } => {
            let client = ActivitiesClient::new(url)?;
            commands::run_signup(&client, activity, email).await?;
        }
        Command::Unregister {
            activity,
            email,
            url,
        } => {
            let client = ActivitiesClient::new(url)?;
            commands::run_unregister(&client, activity, email).await?;
        }
    }

    Ok(())
}
