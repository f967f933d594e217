//! Sports jerseys.
//!
//! Classic layouts are one large opening. Premium layouts add a row beneath
//! the jersey: photo, plaque, photo, centred under the jersey. The plaque on
//! premium layouts is its own cut opening, so ordering one never grows the
//! frame; classic layouts do not offer a plaque at all.

use super::{
    Category, Composition, Exclusion, ExplicitRule, Format, Layout, PlaqueStyle, Profile, rect,
    size,
};
use crate::cutout::{Opening, Purpose};
use crate::defaults::{MAT_BORDER, MAT_REVEAL, MOLDING};
use crate::types::Length as Inches;

/// Jersey top edge below the mat interior top
pub const JERSEY_TOP: f64 = 2.0;
/// Vertical gap between the jersey and the photo row
pub const ROW_GAP: f64 = 2.0;
pub const PLAQUE_HEIGHT: f64 = 2.0;
/// Premium mats show a wider inner-mat reveal
pub const PREMIUM_REVEAL: Inches = Inches::inches(0.5);

pub static FORMATS: [Format; 1] = [Format {
    id: "jersey",
    category: Category::Jerseys,
    name: "Full-size jersey",
    size: size(20.0, 22.0),
    depth: None,
    diameter: None,
    oversize: false,
}];

pub static PROFILE: Profile = Profile {
    border: MAT_BORDER,
    reveal: MAT_REVEAL,
    molding: MOLDING,
    plaque: PlaqueStyle::CutOpening,
    limit: None,
    outer_rounding: None,
};

pub static EXCLUSIONS: [Exclusion; 3] = [
    classic_without_plaque("classic-small"),
    classic_without_plaque("classic-regular"),
    classic_without_plaque("classic-large"),
];

struct Premium {
    interior: (f64, f64),
    jersey: (f64, f64),
    photo: (f64, f64),
    plaque_width: f64,
    /// Horizontal gap between the openings of the photo row
    spacing: f64,
}

const PREMIUM_SMALL: Premium = Premium {
    interior: (22.0, 30.0),
    jersey: (18.0, 20.0),
    photo: (5.0, 3.5),
    plaque_width: 4.0,
    spacing: 1.0,
};

const PREMIUM_REGULAR: Premium = Premium {
    interior: (24.0, 32.0),
    jersey: (20.0, 22.0),
    photo: (6.0, 4.0),
    plaque_width: 5.0,
    spacing: 1.5,
};

const PREMIUM_LARGE: Premium = Premium {
    interior: (28.0, 34.0),
    jersey: (24.0, 24.0),
    photo: (6.0, 4.0),
    plaque_width: 5.0,
    spacing: 1.5,
};

static CLASSIC_SMALL: [Opening; 1] = [classic_opening(18.0, 20.0)];
static CLASSIC_REGULAR: [Opening; 1] = [classic_opening(20.0, 22.0)];
static CLASSIC_LARGE: [Opening; 1] = [classic_opening(22.0, 24.0)];

static PREMIUM_SMALL_OPENINGS: [Opening; 4] = premium_openings(&PREMIUM_SMALL);
static PREMIUM_REGULAR_OPENINGS: [Opening; 4] = premium_openings(&PREMIUM_REGULAR);
static PREMIUM_LARGE_OPENINGS: [Opening; 4] = premium_openings(&PREMIUM_LARGE);

pub static LAYOUTS: [Layout; 6] = [
    classic("classic-small", (22.0, 24.0), &CLASSIC_SMALL),
    classic("classic-regular", (24.0, 26.0), &CLASSIC_REGULAR),
    classic("classic-large", (26.0, 28.0), &CLASSIC_LARGE),
    premium("premium-small", &PREMIUM_SMALL, &PREMIUM_SMALL_OPENINGS),
    premium("premium-regular", &PREMIUM_REGULAR, &PREMIUM_REGULAR_OPENINGS),
    premium("premium-large", &PREMIUM_LARGE, &PREMIUM_LARGE_OPENINGS),
];

const fn classic_opening(w: f64, h: f64) -> Opening {
    Opening::rect(rect(MAT_BORDER.0, JERSEY_TOP, w, h), Purpose::JerseyDisplay).with_z(1)
}

const fn premium_openings(p: &Premium) -> [Opening; 4] {
    let (jersey_w, jersey_h) = p.jersey;
    let (photo_w, photo_h) = p.photo;
    let jersey_x = (p.interior.0 - jersey_w) / 2.0;

    let row_w = photo_w + p.spacing + p.plaque_width + p.spacing + photo_w;
    let left_x = jersey_x + (jersey_w - row_w) / 2.0;
    let plaque_x = left_x + photo_w + p.spacing;
    let right_x = plaque_x + p.plaque_width + p.spacing;
    let row_y = JERSEY_TOP + jersey_h + ROW_GAP;

    [
        Opening::rect(
            rect(jersey_x, JERSEY_TOP, jersey_w, jersey_h),
            Purpose::JerseyDisplay,
        )
        .with_z(1),
        Opening::rect(rect(left_x, row_y, photo_w, photo_h), Purpose::Photo).with_z(2),
        Opening::rect(
            rect(
                plaque_x,
                row_y + (photo_h - PLAQUE_HEIGHT) / 2.0,
                p.plaque_width,
                PLAQUE_HEIGHT,
            ),
            Purpose::Plaque,
        )
        .with_z(2),
        Opening::rect(rect(right_x, row_y, photo_w, photo_h), Purpose::Photo).with_z(2),
    ]
}

const fn classic(
    id: &'static str,
    interior: (f64, f64),
    openings: &'static [Opening],
) -> Layout {
    Layout::specialty(
        Category::Jerseys,
        id,
        ExplicitRule::new(
            size(interior.0, interior.1),
            MAT_BORDER,
            Composition::Rectangles,
            openings,
        )
        .with_reveal(MAT_REVEAL),
    )
}

const fn premium(id: &'static str, p: &Premium, openings: &'static [Opening]) -> Layout {
    Layout::specialty(
        Category::Jerseys,
        id,
        ExplicitRule::new(
            size(p.interior.0, p.interior.1),
            MAT_BORDER,
            Composition::Rectangles,
            openings,
        )
        .with_reveal(PREMIUM_REVEAL),
    )
}

const fn classic_without_plaque(layout: &'static str) -> Exclusion {
    Exclusion {
        format: None,
        layout,
        with_plaque_only: true,
        reason: "plaque not offered on classic jersey frames",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Arrangement;
    use crate::cutout::Shape;
    use crate::types::Rect;

    fn openings(id: &str) -> &'static [Opening] {
        match &LAYOUTS.iter().find(|l| l.id == id).unwrap().arrangement {
            Arrangement::Explicit(rule) => rule.openings,
            _ => unreachable!(),
        }
    }

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect<Inches> {
        Rect::new(Inches(x), Inches(y), Inches(w), Inches(h))
    }

    #[test]
    fn premium_small_row() {
        let bounds: Vec<_> = openings("premium-small")
            .iter()
            .map(|o| o.cutout.bounds())
            .collect();
        let expected = [
            r(2.0, 2.0, 18.0, 20.0),
            r(3.0, 24.0, 5.0, 3.5),
            r(9.0, 24.75, 4.0, 2.0),
            r(14.0, 24.0, 5.0, 3.5),
        ];
        for (got, want) in bounds.iter().zip(&expected) {
            assert!(got.approx_eq(want), "{got:?} != {want:?}");
        }
    }

    #[test]
    fn premium_large_row_is_centred_under_the_jersey() {
        let o = openings("premium-large");
        assert!(o[1].cutout.bounds().approx_eq(&r(4.0, 28.0, 6.0, 4.0)));
        assert!(o[2].cutout.bounds().approx_eq(&r(11.5, 29.0, 5.0, 2.0)));
        assert!(o[3].cutout.bounds().approx_eq(&r(18.0, 28.0, 6.0, 4.0)));
    }

    #[test]
    fn every_premium_layout_cuts_one_plaque() {
        for id in ["premium-small", "premium-regular", "premium-large"] {
            let plaques = openings(id)
                .iter()
                .filter(|o| o.purpose == Purpose::Plaque)
                .count();
            assert_eq!(plaques, 1, "{id}");
        }
        assert!(
            openings("classic-regular")
                .iter()
                .all(|o| o.purpose == Purpose::JerseyDisplay)
        );
    }
}
