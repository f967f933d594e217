//! Vinyl records.
//!
//! Record layouts are fixed arrangements: a sleeve opening and up to two disc
//! circles that overlap it, merged into one cutout. Positions are derived
//! from the named constants below.

use super::{
    Category, Composition, ExplicitRule, Format, Layout, PlaqueStyle, Profile, disc, rect, size,
};
use crate::cutout::{Opening, Purpose};
use crate::defaults::{
    MAT_BORDER, MAT_REVEAL, MOLDING, PLAQUE_EXTENSION, SMALL_NAMEPLATE_HEIGHT,
    SMALL_NAMEPLATE_WIDTH,
};
use crate::types::{Length as Inches, Size};

pub const SLEEVE: f64 = 12.25;
pub const DISC_DIAMETER: f64 = 11.75;

/// Sleeve right edge to the disc centre, so the label shows clear of the sleeve
pub const GAP_TO_LABEL: f64 = 3.0;
/// Centre to centre between the two discs of a double album
pub const RECORD_CENTER_SPACING: f64 = 10.0;
/// The double arrangement sits this far right of the mat border
pub const DOUBLE_GROUP_OFFSET_X: f64 = 1.0;
/// Extra sleeve opening on each side of the double arrangement
pub const COVER_BLEED: f64 = 0.06;
/// Discs of the double arrangement are cut slightly under size
pub const DOUBLE_DISC_TRIM: f64 = 0.05;

pub static FORMATS: [Format; 1] = [Format {
    id: "lp",
    category: Category::Records,
    name: "12\" LP",
    size: size(SLEEVE, SLEEVE),
    depth: None,
    diameter: Some(Inches::inches(DISC_DIAMETER)),
    oversize: false,
}];

pub static PROFILE: Profile = Profile {
    border: MAT_BORDER,
    reveal: MAT_REVEAL,
    molding: MOLDING,
    plaque: PlaqueStyle::Extension {
        extension: PLAQUE_EXTENSION,
        plate: Size::new(SMALL_NAMEPLATE_WIDTH, SMALL_NAMEPLATE_HEIGHT),
    },
    limit: None,
    outer_rounding: None,
};

// ==== cover-only ====

const COVER_ONLY_BORDER: f64 = 2.0;

static COVER_ONLY: [Opening; 1] = [Opening::rect(
    rect(COVER_ONLY_BORDER, COVER_ONLY_BORDER, SLEEVE, SLEEVE),
    Purpose::AlbumCover,
)
.with_z(2)];

// ==== single-with-cover ====

const SINGLE_BORDER: f64 = 1.0;
const SINGLE_ARTWORK: (f64, f64) = (22.0, 14.0);
const SINGLE_INTERIOR: (f64, f64) = (24.0, SINGLE_ARTWORK.1 + 2.0 * SINGLE_BORDER);
/// Sleeve inset from the left edge of the artwork area
const SINGLE_COVER_INSET: f64 = 0.65;
const SINGLE_COVER_X: f64 = SINGLE_BORDER + SINGLE_COVER_INSET;
const SINGLE_COVER_Y: f64 = SINGLE_BORDER + (SINGLE_ARTWORK.1 - SLEEVE) / 2.0;

static SINGLE_WITH_COVER: [Opening; 2] = [
    Opening::circle(
        disc(
            SINGLE_COVER_X + SLEEVE + GAP_TO_LABEL,
            SINGLE_BORDER + SINGLE_ARTWORK.1 / 2.0,
            DISC_DIAMETER,
        ),
        Purpose::Record,
    )
    .with_z(0),
    Opening::rect(
        rect(SINGLE_COVER_X, SINGLE_COVER_Y, SLEEVE, SLEEVE),
        Purpose::AlbumCover,
    )
    .with_z(2),
];

// ==== double-with-covers ====

const DOUBLE_BORDER: f64 = 1.0;
const DOUBLE_ARTWORK: (f64, f64) = (32.5, 14.5);
const DOUBLE_COVER_X: f64 = DOUBLE_BORDER + DOUBLE_GROUP_OFFSET_X;
const DOUBLE_COVER_Y: f64 = DOUBLE_BORDER + (DOUBLE_ARTWORK.1 - SLEEVE) / 2.0;
const DOUBLE_LEFT_DISC_X: f64 = DOUBLE_COVER_X + SLEEVE + GAP_TO_LABEL;
const DOUBLE_DISC_Y: f64 = DOUBLE_BORDER + DOUBLE_ARTWORK.1 / 2.0;
const DOUBLE_DISC: f64 = DISC_DIAMETER - DOUBLE_DISC_TRIM;

static DOUBLE_WITH_COVERS: [Opening; 3] = [
    Opening::circle(
        disc(
            DOUBLE_LEFT_DISC_X + RECORD_CENTER_SPACING,
            DOUBLE_DISC_Y,
            DOUBLE_DISC,
        ),
        Purpose::Record,
    )
    .with_z(0),
    Opening::circle(
        disc(DOUBLE_LEFT_DISC_X, DOUBLE_DISC_Y, DOUBLE_DISC),
        Purpose::Record,
    )
    .with_z(1),
    Opening::rect(
        rect(
            DOUBLE_COVER_X - COVER_BLEED,
            DOUBLE_COVER_Y - COVER_BLEED,
            SLEEVE + 2.0 * COVER_BLEED,
            SLEEVE + 2.0 * COVER_BLEED,
        ),
        Purpose::AlbumCover,
    )
    .with_z(2),
];

pub static LAYOUTS: [Layout; 3] = [
    Layout::specialty(
        Category::Records,
        "cover-only",
        ExplicitRule::new(
            size(
                SLEEVE + 2.0 * COVER_ONLY_BORDER,
                SLEEVE + 2.0 * COVER_ONLY_BORDER,
            ),
            Inches::inches(COVER_ONLY_BORDER),
            Composition::Rectangles,
            &COVER_ONLY,
        ),
    ),
    Layout::specialty(
        Category::Records,
        "single-with-cover",
        ExplicitRule::new(
            size(SINGLE_INTERIOR.0, SINGLE_INTERIOR.1),
            Inches::inches(SINGLE_BORDER),
            Composition::RectWithCircle,
            &SINGLE_WITH_COVER,
        ),
    ),
    Layout::specialty(
        Category::Records,
        "double-with-covers",
        ExplicitRule::new(
            size(
                DOUBLE_ARTWORK.0 + 2.0 * DOUBLE_BORDER,
                DOUBLE_ARTWORK.1 + 2.0 * DOUBLE_BORDER,
            ),
            Inches::inches(DOUBLE_BORDER),
            Composition::RectWithTwoCircles,
            &DOUBLE_WITH_COVERS,
        ),
    ),
];
