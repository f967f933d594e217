//! Catalog browsing, manufacturability and pricing through the public API.

use matcut::cutout::{CircleCutout, RectCutout};
use matcut::geometry::{Circle, circle_circle, circle_vertical_line};
use matcut::path::{FillRule, stitch};
use matcut::pricing::{Cents, Glazing, Hardware};
use matcut::types::{Point, Rect, Size};
use matcut::{
    Category, Cutout, EngineError, Layout, LayoutFilter, LayoutGroup, Length, ManifestRequest,
    PriceOptions, Unmanufacturable, Validity, list_layouts, lookup_format, mat_path, price,
    validate_border_reveal, validate_layout,
};
use matcut::catalog::Composition;

fn ids(layouts: &[&Layout]) -> Vec<&'static str> {
    layouts.iter().map(|l| l.id).collect()
}

fn pt(x: f64, y: f64) -> Point<Length> {
    Point::new(Length(x), Length(y))
}

#[test]
fn categories_round_trip_through_ids() {
    for category in Category::ALL {
        assert_eq!(Category::from_id(category.id()), Some(category));
        assert!(!category.formats().is_empty());
        assert!(!category.layouts().is_empty());
    }
    assert_eq!(Category::from_id("posters"), None);
}

#[test]
fn lookups_are_exact() {
    assert_eq!(lookup_format(Category::Comics, "slabbed-cgc").unwrap().size.h, Length(13.0));
    assert!(lookup_format(Category::Comics, "SLABBED-CGC").is_err());
    assert!(lookup_format(Category::Cards, "").is_err());
}

#[test]
fn pack_slabs_hide_their_excluded_layouts() {
    let all = list_layouts(Category::Cards, &LayoutFilter::new()).unwrap();
    let available = list_layouts(
        Category::Cards,
        &LayoutFilter::new().available_for(ManifestRequest::new(
            Category::Cards,
            "psa-pack-slabs",
            "",
        )),
    )
    .unwrap();
    let available = ids(&available);
    assert!(available.len() < all.len());
    for gone in ["7x1", "8x1", "9x1", "2x8", "2x9"] {
        assert!(!available.contains(&gone), "{gone}");
    }
    assert!(available.contains(&"1x1"));
}

#[test]
fn plaque_narrows_availability() {
    let filter = |plaque| {
        LayoutFilter::new().available_for(
            ManifestRequest::new(Category::Cards, "psa", "").with_plaque(plaque),
        )
    };
    let without = list_layouts(Category::Cards, &filter(false)).unwrap();
    let with = list_layouts(Category::Cards, &filter(true)).unwrap();
    assert!(ids(&without).contains(&"9x1"));
    assert!(!ids(&with).contains(&"9x1"));
}

#[test]
fn group_filter_combines_with_availability() {
    let rows = list_layouts(
        Category::Jerseys,
        &LayoutFilter::new()
            .group(LayoutGroup::Specialty)
            .available_for(ManifestRequest::new(Category::Jerseys, "jersey", "").with_plaque(true)),
    )
    .unwrap();
    assert_eq!(
        ids(&rows),
        ["premium-small", "premium-regular", "premium-large"]
    );
}

#[test]
fn unknown_format_in_filter_is_an_error() {
    let err = list_layouts(
        Category::Comics,
        &LayoutFilter::new().available_for(ManifestRequest::new(Category::Comics, "manga", "")),
    )
    .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

#[test]
fn unmanufacturable_is_a_value() {
    let v = validate_layout(&ManifestRequest::new(Category::Comics, "slabbed-cgc", "4-vertical"))
        .unwrap();
    let Validity::Invalid { reason, height, .. } = v else {
        panic!("slabbed 4-vertical should not fit: {v:?}");
    };
    assert!(matches!(reason, Unmanufacturable::ExceedsFrameLimit { .. }));
    assert_eq!(height, Some(Length(59.0)));
    assert_eq!(
        reason.to_string(),
        "exceeds maximum manufacturable size of 48\" × 48\""
    );
}

#[test]
fn border_reveal_messages() {
    let msg = |b, r| validate_border_reveal(b, r).unwrap_err().to_string();
    assert_eq!(msg(0.5, 0.5), "Mat reveal must be less than mat border");
    assert_eq!(msg(0.25, 0.125), "Mat border must be at least 0.5 inches");
    assert_eq!(msg(1.0, -0.25), "Mat reveal cannot be negative");
}

#[test]
fn intersections_are_symmetric_and_optional() {
    let a = Circle::new(pt(0.0, 0.0), Length(5.0));
    let b = Circle::new(pt(6.0, 0.0), Length(5.0));
    let ab = circle_circle(&a, &b).unwrap();
    let ba = circle_circle(&b, &a).unwrap();
    assert!(ab.top.approx_eq(ba.top));
    assert!(ab.bottom.approx_eq(ba.bottom));
    assert!(ab.top.approx_eq(pt(3.0, -4.0)));

    assert!(circle_vertical_line(&a, Length(5.5)).is_none());
    assert!(circle_circle(&a, &Circle::new(pt(20.0, 0.0), Length(5.0))).is_none());
}

#[test]
fn failed_stitch_falls_back_to_separate_holes() {
    let sleeve = Rect::new(Length(1.0), Length(1.0), Length(4.0), Length(4.0));
    let far_disc = Circle::new(pt(12.0, 3.0), Length(2.0));
    assert!(stitch(&sleeve, &[far_disc]).is_none());

    let cutouts = [
        Cutout::from(RectCutout { rect: sleeve }),
        Cutout::from(CircleCutout { circle: far_disc }),
    ];
    let path = mat_path(
        Size::new(Length(16.0), Length(6.0)),
        &cutouts,
        Composition::RectWithCircle,
    )
    .unwrap();
    assert_eq!(path.fill_rule, FillRule::EvenOdd);
    assert_eq!(path.holes().len(), 2);
    assert_eq!(path.holes()[1].arc_count(), 2);
}

#[test]
fn quotes_are_itemized() {
    let quote = price(
        Category::Cards,
        "3x3",
        &PriceOptions {
            glazing: Glazing::NonGlare,
            hardware: Hardware::Standard,
            plaque: true,
        },
    );
    assert_eq!(quote.base, Cents(12000 + 8 * 1500));
    assert_eq!(quote.hardware_upcharge, Cents::ZERO);
    assert_eq!(quote.total(), Cents(24000 + 800 + 2900));
    assert_eq!(price(Category::Wedding, "elopement", &PriceOptions::default()).total(), Cents(12000));
}
