//! tcg-explorer - browse the Pokemon TCG catalog from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tcg_explorer::commands::{BrowseCommand, DemoCommand, SearchCommand, SearchOptions, SetsCommand};
use tcg_explorer::config::{Config, OutputFormat};
use tcg_explorer::sort::SortKey;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tcg-explorer",
    version,
    about = "Search, sort and inspect Pokemon TCG cards",
    long_about = "Searches the Pokemon TCG catalog API, sorts and filters the results, \
                  and shows them as a card grid with an optional detail view."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Catalog API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key for higher rate limits
    #[arg(long, global = true, env = "TCG_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List sets, then run sample searches (default)
    Demo {
        /// Card name to search for
        #[arg(short, long)]
        query: Option<String>,
    },

    /// List all card sets
    Sets,

    /// Search cards by name
    #[command(alias = "s")]
    Search {
        /// Card name
        query: String,

        /// Only search within this set id
        #[arg(long = "set")]
        set_id: Option<String>,

        /// Sort order (price-high, price-low, name-asc, name-desc, set-asc, set-desc, date-new, date-old)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Minimum price filter
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price filter
        #[arg(long)]
        max_price: Option<f64>,

        /// Allowed rarities (comma-separated)
        #[arg(long, value_delimiter = ',')]
        rarity: Option<Vec<String>>,

        /// Open the detail view for the n-th card
        #[arg(long)]
        open: Option<usize>,
    },

    /// Interactive session
    #[command(alias = "b")]
    Browse {
        /// Initial sort order
        #[arg(long)]
        sort: Option<SortKey>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(key) = cli.api_key {
        config.api_key = Some(key);
    }

    match cli.command.unwrap_or(Commands::Demo { query: None }) {
        Commands::Demo { query } => {
            if let Some(query) = query {
                config.demo_query = query;
            }
            let cmd = DemoCommand::new(config);
            cmd.execute(&mut std::io::stdout()).await?;
        }

        Commands::Sets => {
            let cmd = SetsCommand::new(config);
            println!("{}", cmd.execute().await?);
        }

        Commands::Search { query, set_id, sort, min_price, max_price, rarity, open } => {
            if let Some(sort) = sort {
                config.sort = sort;
            }
            if min_price.is_some() {
                config.min_price = min_price;
            }
            if max_price.is_some() {
                config.max_price = max_price;
            }
            if let Some(rarities) = rarity {
                config.rarities = rarities;
            }

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&SearchOptions { query, set_id, open }).await?;
            println!("{}", output);
        }

        Commands::Browse { sort } => {
            if let Some(sort) = sort {
                config.sort = sort;
            }
            BrowseCommand::new(config).execute().await?;
        }
    }

    Ok(())
}
