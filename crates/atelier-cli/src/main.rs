mod catalog;
mod favorites;
mod render;

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use atelier_client::CatalogClient;
use atelier_store::{FavoritesStore, FileStore};

#[derive(Debug, Parser)]
#[command(name = "atelier")]
#[command(about = "Browse the art-supply catalog and manage favorites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products
    List {
        /// Case-insensitive name search
        #[arg(long, short)]
        query: Option<String>,
        /// Exact brand to show
        #[arg(long, short)]
        category: Option<String>,
    },
    /// List brand categories in catalog order
    Categories,
    /// Show one product with its reviews and favorite status
    Show {
        /// Product id
        id: String,
    },
    /// Add the product to favorites, or remove it if already saved
    Toggle {
        /// Product id
        id: String,
    },
    /// List saved favorites
    Favorites {
        /// Case-insensitive name search
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Remove one favorite
    Remove {
        /// Product id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Remove every favorite
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Reads `.env` itself before the ATELIER_* variables.
    let config = atelier_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, command = ?cli.command, "starting");

    let catalog = Arc::new(
        CatalogClient::from_config(&config).context("failed to build catalog client")?,
    );
    let favorites = FavoritesStore::with_key(
        Arc::new(FileStore::new(&config.data_dir)),
        config.favorites_key.clone(),
    );

    match cli.command {
        Commands::List { query, category } => {
            catalog::run_list(catalog, query.as_deref(), category.as_deref()).await
        }
        Commands::Categories => catalog::run_categories(catalog).await,
        Commands::Show { id } => catalog::run_show(catalog, favorites, id).await,
        Commands::Toggle { id } => catalog::run_toggle(catalog, favorites, id).await,
        Commands::Favorites { query } => favorites::run_list(favorites, query.as_deref()).await,
        Commands::Remove { id, yes } => favorites::run_remove(favorites, &id, yes).await,
        Commands::Clear { yes } => favorites::run_clear(favorites, yes).await,
    }
}
