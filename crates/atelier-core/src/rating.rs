use crate::product::Comment;

/// Average star rating and review count, computed from a product's comments.
///
/// The average is `None` when there are no comments; a zero-review product
/// never shows a numeric rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRating {
    average: Option<f64>,
    count: usize,
}

impl DerivedRating {
    #[must_use]
    pub fn from_comments(comments: &[Comment]) -> Self {
        Self {
            average: average_rating(comments),
            count: comments.len(),
        }
    }

    /// Mean rating rounded to one decimal place.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        self.average
    }

    /// Number of reviews.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl std::fmt::Display for DerivedRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.average {
            Some(avg) => write!(f, "{avg:.1}"),
            None => write!(f, "No rating"),
        }
    }
}

/// Returns the mean of `comments[].rating` rounded to one decimal, or `None`
/// for an empty slice.
#[must_use]
pub fn average_rating(comments: &[Comment]) -> Option<f64> {
    if comments.is_empty() {
        return None;
    }
    let total: u32 = comments.iter().map(|c| u32::from(c.rating)).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = f64::from(total) / comments.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
