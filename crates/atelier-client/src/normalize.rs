//! Normalization from raw wire types to [`atelier_core::Product`].
//!
//! Absent fields become zero values. Only `id` is required; prices and deals
//! outside their valid ranges reject the record.

use atelier_core::{Comment, Product};
use chrono::{DateTime, NaiveDate};

use crate::error::ClientError;
use crate::types::{RawComment, RawNumber, RawProduct};

/// Decodes one catalog record from its JSON value and normalizes it.
///
/// A field carrying the wrong JSON type rejects only this record.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] if the record does not decode into a
/// [`RawProduct`] or fails [`normalize_product`].
pub(crate) fn normalize_record(value: serde_json::Value) -> Result<Product, ClientError> {
    let product_id = record_id(&value);
    let raw = serde_json::from_value::<RawProduct>(value).map_err(|e| ClientError::Validation {
        product_id,
        reason: e.to_string(),
    })?;
    normalize_product(raw)
}

fn record_id(value: &serde_json::Value) -> String {
    match value.get("id") {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => "<missing>".to_owned(),
    }
}

/// Normalizes a raw [`RawProduct`] into a [`Product`].
///
/// # Errors
///
/// Returns [`ClientError::Validation`] if the record has no `id`, a negative
/// or non-finite `price`, or a `limitedTimeDeal` outside `[0, 1)`.
pub fn normalize_product(raw: RawProduct) -> Result<Product, ClientError> {
    let id = raw
        .id
        .map(crate::types::RawId::into_string)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ClientError::Validation {
            product_id: "<missing>".to_owned(),
            reason: "record has no id".into(),
        })?;

    let price = number_field(raw.price.as_ref(), "price", &id)?;
    if !price.is_finite() || price < 0.0 {
        return Err(ClientError::Validation {
            product_id: id,
            reason: format!("price {price} is not a non-negative amount"),
        });
    }

    let limited_time_deal = number_field(raw.limited_time_deal.as_ref(), "limitedTimeDeal", &id)?;
    if !(0.0..1.0).contains(&limited_time_deal) {
        return Err(ClientError::Validation {
            product_id: id,
            reason: format!("limitedTimeDeal {limited_time_deal} is outside [0, 1)"),
        });
    }

    let comments = raw
        .comments
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| normalize_comment(c, &id))
        .collect();

    Ok(Product {
        art_name: raw.art_name.unwrap_or_default(),
        price,
        limited_time_deal,
        image: raw.image.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        brand: raw.brand.unwrap_or_default(),
        glass_surface: raw.glass_surface.unwrap_or(false),
        comments,
        id,
    })
}

/// Reads an optional numeric field, defaulting to `0.0` when absent.
fn number_field(value: Option<&RawNumber>, field: &str, id: &str) -> Result<f64, ClientError> {
    match value {
        None => Ok(0.0),
        Some(raw) => raw.as_f64().ok_or_else(|| ClientError::Validation {
            product_id: id.to_owned(),
            reason: format!("{field} is not a number: {raw:?}"),
        }),
    }
}

/// Normalizes one review. Reviews without a whole 1–5 rating are dropped.
fn normalize_comment(raw: RawComment, product_id: &str) -> Option<Comment> {
    let rating = raw.rating.as_ref().and_then(RawNumber::as_f64);
    let Some(rating) = rating.and_then(whole_star_rating) else {
        tracing::warn!(
            product_id,
            rating = ?raw.rating,
            "dropping comment with out-of-range rating"
        );
        return None;
    };

    Some(Comment {
        id: raw.id.map(crate::types::RawId::into_string).unwrap_or_default(),
        user: raw.user.unwrap_or_default(),
        rating,
        comment: raw.comment.unwrap_or_default(),
        created_at: raw.created_at.as_deref().and_then(parse_comment_date),
    })
}

fn whole_star_rating(value: f64) -> Option<u8> {
    if value.fract() != 0.0 || !(1.0..=5.0).contains(&value) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let stars = value as u8;
    Some(stars)
}

/// Parses a review date.
///
/// Accepts the service's `DD-MM-YYYY`, plain `YYYY-MM-DD`, and full RFC 3339
/// timestamps. Returns `None` for anything else.
pub(crate) fn parse_comment_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
