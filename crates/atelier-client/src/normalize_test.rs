use super::*;
use crate::types::RawId;

// -----------------------------------------------------------------------
// normalize_product
// -----------------------------------------------------------------------

fn make_raw_comment(rating: Option<RawNumber>, created_at: Option<&str>) -> RawComment {
    RawComment {
        id: Some(RawId::Text("c1".to_owned())),
        user: Some("tuan".to_owned()),
        rating,
        comment: Some("Holds paint well.".to_owned()),
        created_at: created_at.map(str::to_owned),
    }
}

fn make_raw_product(id: Option<RawId>) -> RawProduct {
    RawProduct {
        id,
        art_name: Some("Glass Palette".to_owned()),
        price: Some(RawNumber::Number(24.5)),
        limited_time_deal: Some(RawNumber::Number(0.1)),
        image: Some("https://cdn.example.com/palette.png".to_owned()),
        description: Some("Tempered glass mixing palette.".to_owned()),
        brand: Some("Arches".to_owned()),
        glass_surface: Some(true),
        comments: Some(vec![make_raw_comment(
            Some(RawNumber::Number(4.0)),
            Some("14-10-2024"),
        )]),
    }
}

#[test]
fn normalize_product_copies_all_fields() {
    let product = normalize_product(make_raw_product(Some(RawId::Text("12".to_owned())))).unwrap();
    assert_eq!(product.id, "12");
    assert_eq!(product.art_name, "Glass Palette");
    assert!((product.price - 24.5).abs() < f64::EPSILON);
    assert!((product.limited_time_deal - 0.1).abs() < f64::EPSILON);
    assert_eq!(product.brand, "Arches");
    assert!(product.glass_surface);
    assert_eq!(product.comments.len(), 1);
    assert_eq!(product.comments[0].rating, 4);
    assert_eq!(
        product.comments[0].created_at,
        NaiveDate::from_ymd_opt(2024, 10, 14)
    );
}

#[test]
fn normalize_product_accepts_numeric_id() {
    let raw = make_raw_product(Some(RawId::Number(serde_json::Number::from(42))));
    let product = normalize_product(raw).unwrap();
    assert_eq!(product.id, "42");
}

#[test]
fn normalize_product_rejects_missing_id() {
    let err = normalize_product(make_raw_product(None)).unwrap_err();
    assert!(matches!(err, ClientError::Validation { .. }), "got: {err:?}");
}

#[test]
fn normalize_product_rejects_blank_id() {
    let err = normalize_product(make_raw_product(Some(RawId::Text("  ".to_owned())))).unwrap_err();
    assert!(matches!(err, ClientError::Validation { .. }), "got: {err:?}");
}

#[test]
fn normalize_product_defaults_absent_fields() {
    let raw = RawProduct {
        id: Some(RawId::Text("7".to_owned())),
        ..RawProduct::default()
    };
    let product = normalize_product(raw).unwrap();
    assert_eq!(product.id, "7");
    assert_eq!(product.art_name, "");
    assert!(product.price.abs() < f64::EPSILON);
    assert!(product.limited_time_deal.abs() < f64::EPSILON);
    assert!(!product.glass_surface);
    assert!(product.comments.is_empty());
}

#[test]
fn normalize_product_parses_numeric_string_price() {
    let mut raw = make_raw_product(Some(RawId::Text("1".to_owned())));
    raw.price = Some(RawNumber::Text(" 19.99 ".to_owned()));
    let product = normalize_product(raw).unwrap();
    assert!((product.price - 19.99).abs() < f64::EPSILON);
}

#[test]
fn normalize_product_rejects_non_numeric_price_string() {
    let mut raw = make_raw_product(Some(RawId::Text("1".to_owned())));
    raw.price = Some(RawNumber::Text("cheap".to_owned()));
    let err = normalize_product(raw).unwrap_err();
    assert!(
        matches!(err, ClientError::Validation { ref product_id, .. } if product_id == "1"),
        "got: {err:?}"
    );
}

#[test]
fn normalize_product_rejects_negative_price() {
    let mut raw = make_raw_product(Some(RawId::Text("1".to_owned())));
    raw.price = Some(RawNumber::Number(-3.0));
    assert!(matches!(
        normalize_product(raw),
        Err(ClientError::Validation { .. })
    ));
}

#[test]
fn normalize_product_rejects_deal_of_one_or_more() {
    let mut raw = make_raw_product(Some(RawId::Text("1".to_owned())));
    raw.limited_time_deal = Some(RawNumber::Number(1.0));
    assert!(matches!(
        normalize_product(raw),
        Err(ClientError::Validation { .. })
    ));
}

#[test]
fn normalize_product_rejects_negative_deal() {
    let mut raw = make_raw_product(Some(RawId::Text("1".to_owned())));
    raw.limited_time_deal = Some(RawNumber::Number(-0.1));
    assert!(matches!(
        normalize_product(raw),
        Err(ClientError::Validation { .. })
    ));
}

#[test]
fn normalize_product_drops_out_of_range_ratings() {
    let mut raw = make_raw_product(Some(RawId::Text("1".to_owned())));
    raw.comments = Some(vec![
        make_raw_comment(Some(RawNumber::Number(5.0)), None),
        make_raw_comment(Some(RawNumber::Number(0.0)), None),
        make_raw_comment(Some(RawNumber::Number(6.0)), None),
        make_raw_comment(Some(RawNumber::Number(3.5)), None),
        make_raw_comment(None, None),
        make_raw_comment(Some(RawNumber::Text("2".to_owned())), None),
    ]);
    let product = normalize_product(raw).unwrap();
    let ratings: Vec<u8> = product.comments.iter().map(|c| c.rating).collect();
    assert_eq!(ratings, vec![5, 2]);
}

#[test]
fn normalize_product_keeps_comment_with_unparsable_date() {
    let mut raw = make_raw_product(Some(RawId::Text("1".to_owned())));
    raw.comments = Some(vec![make_raw_comment(
        Some(RawNumber::Number(3.0)),
        Some("yesterday"),
    )]);
    let product = normalize_product(raw).unwrap();
    assert_eq!(product.comments.len(), 1);
    assert_eq!(product.comments[0].created_at, None);
}

// -----------------------------------------------------------------------
// parse_comment_date
// -----------------------------------------------------------------------

#[test]
fn parse_comment_date_day_first() {
    assert_eq!(
        parse_comment_date("03-07-2024"),
        NaiveDate::from_ymd_opt(2024, 7, 3)
    );
}

#[test]
fn parse_comment_date_iso_date() {
    assert_eq!(
        parse_comment_date("2024-07-03"),
        NaiveDate::from_ymd_opt(2024, 7, 3)
    );
}

#[test]
fn parse_comment_date_rfc3339() {
    assert_eq!(
        parse_comment_date("2024-07-03T18:25:43.511Z"),
        NaiveDate::from_ymd_opt(2024, 7, 3)
    );
}

#[test]
fn parse_comment_date_invalid_is_none() {
    assert_eq!(parse_comment_date("31-02-2024"), None);
    assert_eq!(parse_comment_date(""), None);
}

// -----------------------------------------------------------------------
// normalize_record
// -----------------------------------------------------------------------

#[test]
fn normalize_record_accepts_well_typed_record() {
    let product = normalize_record(serde_json::json!({
        "id": "5",
        "artName": "Palette Knife",
        "price": "12.5",
        "glassSurface": false
    }))
    .unwrap();
    assert_eq!(product.id, "5");
    assert!((product.price - 12.5).abs() < f64::EPSILON);
}

#[test]
fn normalize_record_mistyped_field_is_validation_with_id() {
    let err = normalize_record(serde_json::json!({
        "id": "2",
        "artName": "Easel",
        "glassSurface": "yes"
    }))
    .unwrap_err();
    assert_eq!(err.kind(), atelier_core::FailureKind::Validation);
    match err {
        ClientError::Validation { product_id, .. } => assert_eq!(product_id, "2"),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn normalize_record_numeric_id_is_reported() {
    let err = normalize_record(serde_json::json!({ "id": 9, "comments": "none" })).unwrap_err();
    assert!(matches!(err, ClientError::Validation { ref product_id, .. } if product_id == "9"));
}

#[test]
fn normalize_record_non_object_is_validation() {
    let err = normalize_record(serde_json::json!("not a product")).unwrap_err();
    assert!(matches!(err, ClientError::Validation { ref product_id, .. } if product_id == "<missing>"));
}
