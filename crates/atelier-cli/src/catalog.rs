//! Catalog and detail command handlers.

use std::sync::Arc;

use atelier_client::CatalogClient;
use atelier_screens::{CatalogScreen, DetailScreen, ToggleOutcome};
use atelier_store::{FavoritesStore, FileStore};

use crate::render;

/// Prints the catalog filtered by `query` and `category`.
///
/// # Errors
///
/// Returns an error if the catalog fetch fails.
pub(crate) async fn run_list(
    catalog: Arc<CatalogClient>,
    query: Option<&str>,
    category: Option<&str>,
) -> anyhow::Result<()> {
    let mut screen = CatalogScreen::new(catalog);
    screen.on_mount().await;
    render::emit_notice(screen.take_notice())?;

    if let Some(query) = query {
        screen.set_query(query);
    }
    if let Some(category) = category {
        screen.select_category(category);
    }

    let visible = screen.visible();
    if visible.is_empty() {
        println!("no products found");
        return Ok(());
    }
    for product in visible {
        println!("{}", render::product_line(product));
    }
    Ok(())
}

/// Prints the category chips in catalog order.
///
/// # Errors
///
/// Returns an error if the catalog fetch fails.
pub(crate) async fn run_categories(catalog: Arc<CatalogClient>) -> anyhow::Result<()> {
    let mut screen = CatalogScreen::new(catalog);
    screen.on_mount().await;
    render::emit_notice(screen.take_notice())?;

    for category in screen.categories() {
        println!("{category}");
    }
    Ok(())
}

/// Prints one product with its favorite status.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched.
pub(crate) async fn run_show(
    catalog: Arc<CatalogClient>,
    favorites: FavoritesStore<FileStore>,
    id: String,
) -> anyhow::Result<()> {
    let mut screen = DetailScreen::new(catalog, favorites, Some(id));
    screen.on_mount().await;
    render::emit_notice(screen.take_notice())?;

    match screen.product() {
        Some(product) => print!("{}", render::product_detail(product, screen.is_favorite())),
        None => println!("No product available"),
    }
    Ok(())
}

/// Flips the favorite status of one product.
///
/// # Errors
///
/// Returns an error if the product cannot be fetched or the store fails.
pub(crate) async fn run_toggle(
    catalog: Arc<CatalogClient>,
    favorites: FavoritesStore<FileStore>,
    id: String,
) -> anyhow::Result<()> {
    let mut screen = DetailScreen::new(catalog, favorites, Some(id));
    screen.on_mount().await;
    render::emit_notice(screen.take_notice())?;

    let outcome = screen.toggle_favorite().await;
    tracing::debug!(?outcome, "toggle finished");
    if outcome == ToggleOutcome::Unavailable {
        println!("No product available");
        return Ok(());
    }
    render::emit_notice(screen.take_notice())
}
