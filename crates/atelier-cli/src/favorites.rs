//! Favorites command handlers.

use atelier_screens::{FavoritesScreen, RemoveOutcome};
use atelier_store::{FavoritesStore, FileStore};

use crate::render::{self, AssumeYes, StdinConfirm};

async fn mounted(store: FavoritesStore<FileStore>) -> anyhow::Result<FavoritesScreen<FileStore>> {
    let mut screen = FavoritesScreen::new(store);
    screen.on_mount().await;
    render::emit_notice(screen.take_notice())?;
    Ok(screen)
}

/// Prints saved favorites, optionally narrowed by `query`.
///
/// # Errors
///
/// Returns an error if the favorites cannot be read.
pub(crate) async fn run_list(
    store: FavoritesStore<FileStore>,
    query: Option<&str>,
) -> anyhow::Result<()> {
    let mut screen = mounted(store).await?;
    if let Some(query) = query {
        screen.set_query(query);
    }

    println!("{}", render::favorites_header(screen.total()));
    for product in screen.visible() {
        println!("{}", render::product_line(product));
    }
    Ok(())
}

/// Removes one favorite after confirmation.
///
/// # Errors
///
/// Returns an error if the store fails.
pub(crate) async fn run_remove(
    store: FavoritesStore<FileStore>,
    id: &str,
    yes: bool,
) -> anyhow::Result<()> {
    let mut screen = mounted(store).await?;
    let outcome = if yes {
        screen.remove(id, &AssumeYes).await
    } else {
        screen.remove(id, &StdinConfirm).await
    };
    report(outcome, &format!("{id} is not a favorite"));
    render::emit_notice(screen.take_notice())
}

/// Removes every favorite after confirmation.
///
/// # Errors
///
/// Returns an error if the store fails.
pub(crate) async fn run_clear(store: FavoritesStore<FileStore>, yes: bool) -> anyhow::Result<()> {
    let mut screen = mounted(store).await?;
    let outcome = if yes {
        screen.clear_all(&AssumeYes).await
    } else {
        screen.clear_all(&StdinConfirm).await
    };
    report(outcome, "no favorites to remove");
    render::emit_notice(screen.take_notice())
}

/// Failures surface through the screen notice instead.
fn report(outcome: RemoveOutcome, nothing: &str) {
    match outcome {
        RemoveOutcome::Cancelled => println!("cancelled"),
        RemoveOutcome::Nothing => println!("{nothing}"),
        RemoveOutcome::Removed | RemoveOutcome::Failed(_) => {}
    }
}
