use atelier_core::FailureKind;

/// Transient, non-blocking message for the presentation layer to show once
/// (a toast on mobile, a status line in a terminal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    FavoriteAdded,
    FavoriteRemoved,
    FavoritesCleared,
    Failed { kind: FailureKind, message: String },
}

impl Notice {
    pub(crate) fn failed(kind: FailureKind, error: &impl std::fmt::Display) -> Self {
        Notice::Failed {
            kind,
            message: error.to_string(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failed { .. })
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::FavoriteAdded => write!(f, "Added product to favorites"),
            Notice::FavoriteRemoved => write!(f, "Removed product from favorites"),
            Notice::FavoritesCleared => write!(f, "All favorites removed"),
            Notice::Failed { kind, message } => write!(f, "{kind} error: {message}"),
        }
    }
}

/// A destructive action awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmPrompt {
    RemoveFavorite { art_name: String },
    RemoveAll,
}

impl ConfirmPrompt {
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmPrompt::RemoveFavorite { .. } => "Remove Favorite",
            ConfirmPrompt::RemoveAll => "Remove All Favorites",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ConfirmPrompt::RemoveFavorite { art_name } => {
                format!("Are you sure you want to remove {art_name} from your favorites?")
            }
            ConfirmPrompt::RemoveAll => {
                "Are you sure you want to remove all items from your favorites?".to_owned()
            }
        }
    }
}

/// Blocking confirm/cancel decision supplied by the presentation layer.
pub trait Confirm {
    /// Returns `true` to proceed, `false` to cancel.
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&ConfirmPrompt) -> bool,
{
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self(prompt)
    }
}
