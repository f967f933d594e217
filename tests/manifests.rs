//! End-to-end manifests across the whole catalog.
//!
//! Run with logging: cargo test --features tracing -- --nocapture

use matcut::cutout::Shape;
use matcut::types::Rect;
use matcut::{
    Category, EngineError, Length, ManifestRequest, Purpose, ValidationError, Viewport,
    build_manifest, double_mat_paths, scale_to_fit,
};

const EPS: f64 = 1e-6;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn close(a: Length, b: f64) -> bool {
    (a.raw() - b).abs() < EPS
}

/// Every format in every layout, with default options
fn every_request() -> impl Iterator<Item = ManifestRequest> {
    Category::ALL.into_iter().flat_map(|category| {
        category.formats().iter().flat_map(move |format| {
            category
                .layouts()
                .iter()
                .map(move |layout| ManifestRequest::new(category, format.id, layout.id))
        })
    })
}

#[test]
fn every_layout_builds_inside_its_mat() {
    init_tracing();
    for request in every_request() {
        let m = build_manifest(&request)
            .unwrap_or_else(|e| panic!("{}/{}: {e}", request.format_id, request.layout_id));
        let board = Rect {
            origin: Default::default(),
            size: m.interior,
        };
        for opening in &m.openings {
            assert!(
                board.contains(&opening.bounds()),
                "{}/{} opening {} leaves the mat",
                request.format_id,
                request.layout_id,
                opening.index
            );
        }
        assert!(m.frame.w.raw() >= m.interior.w.raw());
        assert!(m.frame.h.raw() >= m.interior.h.raw());
    }
}

#[test]
fn grid_openings_never_overlap() {
    for request in every_request() {
        let m = build_manifest(&request).unwrap();
        let items: Vec<_> = m
            .openings
            .iter()
            .filter(|o| o.purpose == Purpose::Item)
            .map(|o| o.bounds())
            .collect();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                let apart = a.right().raw() <= b.left().raw() + EPS
                    || b.right().raw() <= a.left().raw() + EPS
                    || a.bottom().raw() <= b.top().raw() + EPS
                    || b.bottom().raw() <= a.top().raw() + EPS;
                assert!(apart, "{}/{}", request.format_id, request.layout_id);
            }
        }
    }
}

#[test]
fn percentages_map_back_to_inches() {
    for request in every_request() {
        let m = build_manifest(&request).unwrap();
        for opening in &m.openings {
            let back = opening.percent.to_absolute(m.interior);
            assert!(
                back.approx_eq(&opening.bounds()),
                "{}/{} opening {}",
                request.format_id,
                request.layout_id,
                opening.index
            );
        }
    }
}

#[test]
fn two_by_three_psa_end_to_end() {
    init_tracing();
    let m = build_manifest(&ManifestRequest::new(Category::Cards, "psa", "2x3")).unwrap();
    assert!(close(m.interior.w, 13.9));
    assert!(close(m.interior.h, 15.2875));

    let xs: Vec<f64> = m.openings.iter().map(|o| o.bounds().origin.x.raw()).collect();
    let ys: Vec<f64> = m.openings.iter().map(|o| o.bounds().origin.y.raw()).collect();
    let expected_x = [2.0, 5.45, 8.9, 2.0, 5.45, 8.9];
    let expected_y = [2.0, 2.0, 2.0, 8.0375, 8.0375, 8.0375];
    for i in 0..6 {
        assert!((xs[i] - expected_x[i]).abs() < EPS, "x[{i}] = {}", xs[i]);
        assert!((ys[i] - expected_y[i]).abs() < EPS, "y[{i}] = {}", ys[i]);
    }

    let path = m.mat_path().unwrap();
    assert_eq!(path.contours.len(), 7);
    insta::assert_snapshot!(path.holes()[5].to_string(), @"M 8.9,8.0375 L 11.9,8.0375 L 11.9,13.2875 L 8.9,13.2875 Z");
}

#[test]
fn preview_scale_drives_pixel_geometry() {
    let m = build_manifest(&ManifestRequest::new(Category::Records, "lp", "cover-only")).unwrap();
    // 18.25" square frame in a 365px box: 20 px/in
    let fit = scale_to_fit(m.frame, &Viewport::new(365.0, 500.0)).unwrap();
    assert!((fit.pixels_per_inch - 20.0).abs() < EPS);

    let scaler = fit.scaler();
    let px = m.mat_path().unwrap().to_px(&scaler);
    insta::assert_snapshot!(px.holes()[0].to_string(), @"M 40,40 L 285,40 L 285,285 L 40,285 Z");
}

#[test]
fn stitched_records_have_one_hole() {
    let m = build_manifest(&ManifestRequest::new(Category::Records, "lp", "double-with-covers"))
        .unwrap();
    let path = m.mat_path().unwrap();
    assert_eq!(path.holes().len(), 1);
    // out around the first disc, around the second, back around the first
    assert_eq!(path.holes()[0].arc_count(), 3);
}

#[test]
fn double_mat_requires_reveal_below_border() {
    let mut m = build_manifest(&ManifestRequest::new(Category::Comics, "modern-age", "4-quad"))
        .unwrap();
    let paths = double_mat_paths(&m).unwrap();
    assert_eq!(paths.top.contours.len(), paths.bottom.contours.len());

    m.mat_reveal = Length(2.0);
    assert_eq!(
        double_mat_paths(&m),
        Err(ValidationError::RevealNotLessThanBorder {
            reveal: 2.0,
            border: 2.0
        })
    );
}

#[test]
fn bottom_mat_openings_shrink_by_the_reveal() {
    let m = build_manifest(&ManifestRequest::new(Category::Cds, "cd", "disc-with-cover")).unwrap();
    let reveal = m.mat_reveal;
    let insets: Vec<_> = m.cutouts().iter().map(|c| c.inset(reveal).bounds()).collect();
    for (inner, cutout) in insets.iter().zip(m.cutouts()) {
        let outer = cutout.bounds();
        assert!(outer.contains(inner));
        assert!(close(outer.size.w - inner.size.w, 2.0 * reveal.raw()));
    }
    assert!(double_mat_paths(&m).is_ok());
}

#[test]
fn requested_options_flow_through() {
    let m = build_manifest(
        &ManifestRequest::new(Category::Magazines, "compact-55x75", "2-horizontal")
            .with_border(3.0)
            .with_reveal(0.5)
            .with_molding(2.0)
            .with_plaque(true),
    )
    .unwrap();
    assert_eq!(m.mat_border, Length(3.0));
    assert_eq!(m.mat_reveal, Length(0.5));
    assert!(close(m.frame.w, m.interior.w.raw() + 4.0));
    // 7.5 item + 6 border + 1.5 plaque
    assert!(close(m.interior.h, 15.0));
    assert!(m.nameplate.is_some());
}

#[test]
fn invalid_pairs_fail_before_geometry() {
    let err = build_manifest(
        &ManifestRequest::new(Category::Cards, "psa", "1x1")
            .with_border(0.25)
            .with_reveal(0.125),
    )
    .unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation(ValidationError::BorderBelowMinimum {
            border: 0.25,
            minimum: 0.5
        })
    );

    let err = build_manifest(&ManifestRequest::new(Category::Cards, "psa", "1x1").with_reveal(2.0))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::Validation(ValidationError::RevealNotLessThanBorder { .. })
    ));
}

#[test]
fn manifests_are_fresh_values() {
    let request = ManifestRequest::new(Category::Wedding, "size-5x7", "invite-rsvp");
    let a = build_manifest(&request).unwrap();
    let b = build_manifest(&request.clone().with_plaque(true)).unwrap();
    assert_eq!(a, build_manifest(&request).unwrap());
    assert_ne!(a.interior, b.interior);
    assert!(close(b.interior.h - a.interior.h, 0.75));
    // the plaque grows the bottom margin, openings stay put
    assert_eq!(a.cutouts(), b.cutouts());
}

#[test]
fn playbill_plaque_sits_below_the_openings() {
    let m = build_manifest(
        &ManifestRequest::new(Category::Playbills, "playbill", "playbill-single").with_plaque(true),
    )
    .unwrap();
    assert!(close(m.interior.w, 9.5));
    assert!(close(m.interior.h, 13.25));
    assert!(close(m.frame.h, 15.25));

    let plate = m.nameplate.unwrap();
    assert!(close(plate.origin.x, 2.5));
    assert!(close(plate.origin.y, 10.75));
    assert!(plate.top().raw() >= m.openings[0].bounds().bottom().raw());
}

#[test]
fn playbill_tickets_are_separate_holes() {
    let m = build_manifest(&ManifestRequest::new(
        Category::Playbills,
        "playbill",
        "playbill-3-ticket-3",
    ))
    .unwrap();
    let tickets = m.openings.iter().filter(|o| o.purpose == Purpose::Ticket).count();
    assert_eq!(tickets, 3);
    let path = m.mat_path().unwrap();
    assert_eq!(path.holes().len(), 6);
    insta::assert_snapshot!(path.holes()[5].to_string(), @"M 14,11 L 19.5,11 L 19.5,13 L 14,13 Z");
}
