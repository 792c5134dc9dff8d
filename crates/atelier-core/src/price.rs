use crate::product::Product;

/// Price as shown to the user: the amount to pay and, when a deal is active,
/// the struck-through original.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceView {
    /// `price * (1 - deal)` with a deal, `price` without.
    pub display_price: f64,
    /// Reconstructed as `display_price / (1 - deal)`; `None` without a deal.
    pub original_price: Option<f64>,
    deal: f64,
}

impl PriceView {
    #[must_use]
    pub fn has_deal(&self) -> bool {
        self.original_price.is_some()
    }

    /// Discount as a whole percent for the "N% OFF" badge.
    #[must_use]
    pub fn deal_percent(&self) -> Option<u32> {
        if !self.has_deal() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.deal * 100.0).round() as u32;
        Some(percent)
    }
}

/// Computes the [`PriceView`] for `product`.
///
/// A zero (or non-positive) deal short-circuits to `display_price = price`
/// with no original price.
#[must_use]
pub fn price_view(product: &Product) -> PriceView {
    let deal = product.limited_time_deal;
    if deal <= 0.0 {
        return PriceView {
            display_price: product.price,
            original_price: None,
            deal: 0.0,
        };
    }
    let display_price = product.price * (1.0 - deal);
    PriceView {
        display_price,
        original_price: Some(display_price / (1.0 - deal)),
        deal,
    }
}
