//! Terminal rendering for products, notices and confirmation prompts.

use std::io::{BufRead, Write};

use atelier_core::{format_comment_date, format_usd, yes_no, Product};
use atelier_screens::{Confirm, ConfirmPrompt, Notice};

/// One-line summary used by list views.
pub(crate) fn product_line(product: &Product) -> String {
    let view = product.price_view();
    let mut line = format!(
        "{:<6} {:<36} {:>10}",
        product.id,
        product.art_name,
        format_usd(view.display_price)
    );
    if let Some(original) = view.original_price {
        line.push_str(&format!(" (was {})", format_usd(original)));
    }
    if let Some(percent) = view.deal_percent() {
        line.push_str(&format!("  {percent}% OFF"));
    }
    line
}

/// Full detail block for `show`.
pub(crate) fn product_detail(product: &Product, is_favorite: bool) -> String {
    let view = product.price_view();
    let rating = product.rating();
    let mut out = String::new();

    out.push_str(&format!("{}  [{}]\n", product.art_name, product.brand));
    out.push_str(&format!("Price: {}", format_usd(view.display_price)));
    if let (Some(original), Some(percent)) = (view.original_price, view.deal_percent()) {
        out.push_str(&format!("  (was {}, {percent}% OFF)", format_usd(original)));
    }
    out.push('\n');
    out.push_str(&format!("Glass surface: {}\n", yes_no(product.glass_surface)));
    out.push_str(&format!("Rating: {rating} ({} reviews)\n", rating.count()));
    out.push_str(&format!("Favorite: {}\n", yes_no(is_favorite)));
    if !product.description.is_empty() {
        out.push('\n');
        out.push_str(&product.description);
        out.push('\n');
    }
    if !product.comments.is_empty() {
        out.push_str("\nReviews\n");
        for comment in &product.comments {
            out.push_str(&format!(
                "  {} {}/5 {}\n    {}\n",
                comment.user,
                comment.rating,
                format_comment_date(comment.created_at),
                comment.comment
            ));
        }
    }
    out
}

/// Count header for the favorites list.
pub(crate) fn favorites_header(total: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    format!("You have {total} {noun}")
}

/// Prints a pending notice to stderr. Returns an error for failure notices
/// so the process exits non-zero.
pub(crate) fn emit_notice(notice: Option<Notice>) -> anyhow::Result<()> {
    match notice {
        Some(notice) if notice.is_error() => Err(anyhow::anyhow!("{notice}")),
        Some(notice) => {
            eprintln!("{notice}");
            Ok(())
        }
        None => Ok(()),
    }
}

/// Asks on the terminal; only an explicit `y`/`yes` proceeds.
pub(crate) struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        eprint!("{}\n{} [y/N] ", prompt.title(), prompt.message());
        if std::io::stderr().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Used for `--yes`.
pub(crate) struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        true
    }
}
