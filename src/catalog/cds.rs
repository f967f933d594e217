//! Compact discs.
//!
//! The double layout shows the insert and discs enlarged; outer frame sizes
//! are ordered in quarter inches.

use super::{
    Category, Composition, ExplicitRule, Format, Layout, PlaqueStyle, Profile, disc, rect, size,
};
use crate::cutout::{Opening, Purpose};
use crate::defaults::{
    MAT_BORDER, MAT_REVEAL, MOLDING, PLAQUE_EXTENSION, QUARTER_INCH, SMALL_NAMEPLATE_HEIGHT,
    SMALL_NAMEPLATE_WIDTH,
};
use crate::types::{Length as Inches, Size};

pub const INSERT: f64 = 4.75;
pub const DISC_DIAMETER: f64 = 4.724;

pub static FORMATS: [Format; 1] = [Format {
    id: "cd",
    category: Category::Cds,
    name: "Jewel case CD",
    size: size(INSERT, INSERT),
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
    outer_rounding: Some(QUARTER_INCH),
};

// ==== cover-only ====

const COVER_ONLY_BORDER: f64 = 1.625;

static COVER_ONLY: [Opening; 1] = [Opening::rect(
    rect(COVER_ONLY_BORDER, COVER_ONLY_BORDER, INSERT, INSERT),
    Purpose::CdInsert,
)];

// ==== disc-with-cover ====

const SINGLE_BORDER: f64 = 0.75;
const SINGLE_ARTWORK: (f64, f64) = (9.0, 5.3);
/// Insert right edge to the disc centre
const SINGLE_GAP_TO_LABEL: f64 = 1.3;
const SINGLE_CONTENT_W: f64 = INSERT + SINGLE_GAP_TO_LABEL + DISC_DIAMETER / 2.0;
const SINGLE_COVER_X: f64 = SINGLE_BORDER + (SINGLE_ARTWORK.0 - SINGLE_CONTENT_W) / 2.0;
const SINGLE_COVER_Y: f64 = SINGLE_BORDER + (SINGLE_ARTWORK.1 - INSERT) / 2.0;
/// Lifts the plate clear of the disc
pub const SINGLE_NAMEPLATE_CLEARANCE: f64 = 0.575;

static DISC_WITH_COVER: [Opening; 2] = [
    Opening::circle(
        disc(
            SINGLE_COVER_X + INSERT + SINGLE_GAP_TO_LABEL,
            SINGLE_BORDER + SINGLE_ARTWORK.1 / 2.0,
            DISC_DIAMETER,
        ),
        Purpose::Disc,
    )
    .with_z(0),
    Opening::rect(
        rect(SINGLE_COVER_X, SINGLE_COVER_Y, INSERT, INSERT),
        Purpose::CdInsert,
    )
    .with_z(1),
];

// ==== double-disc ====

const DOUBLE_BORDER: f64 = 0.75;
const DOUBLE_ARTWORK: (f64, f64) = (21.0, 9.5);
/// Insert and discs are shown enlarged on the double layout
const DOUBLE_SCALE: f64 = 1.75;
const DOUBLE_INSERT: f64 = INSERT * DOUBLE_SCALE;
const DOUBLE_GAP_TO_LABEL: f64 = 1.5;
const DOUBLE_CENTER_SPACING: f64 = 6.5;
const DOUBLE_DISC_TRIM: f64 = 0.05;
const DOUBLE_DISC: f64 = DISC_DIAMETER * DOUBLE_SCALE - DOUBLE_DISC_TRIM;
const DOUBLE_COVER_BLEED: f64 = 0.06;
const DOUBLE_GROUP_OFFSET_X: f64 = 0.5;
const DOUBLE_COVER_X: f64 = DOUBLE_BORDER + DOUBLE_GROUP_OFFSET_X;
const DOUBLE_COVER_Y: f64 = DOUBLE_BORDER + (DOUBLE_ARTWORK.1 - DOUBLE_INSERT) / 2.0;
const DOUBLE_LEFT_DISC_X: f64 = DOUBLE_COVER_X + DOUBLE_INSERT + DOUBLE_GAP_TO_LABEL;
const DOUBLE_DISC_Y: f64 = DOUBLE_BORDER + DOUBLE_ARTWORK.1 / 2.0;
pub const DOUBLE_NAMEPLATE_CLEARANCE: f64 = 0.6;

static DOUBLE_DISC_OPENINGS: [Opening; 3] = [
    Opening::circle(
        disc(
            DOUBLE_LEFT_DISC_X + DOUBLE_CENTER_SPACING,
            DOUBLE_DISC_Y,
            DOUBLE_DISC,
        ),
        Purpose::Disc,
    )
    .with_z(0),
    Opening::circle(
        disc(DOUBLE_LEFT_DISC_X, DOUBLE_DISC_Y, DOUBLE_DISC),
        Purpose::Disc,
    )
    .with_z(1),
    Opening::rect(
        rect(
            DOUBLE_COVER_X - DOUBLE_COVER_BLEED,
            DOUBLE_COVER_Y - DOUBLE_COVER_BLEED,
            DOUBLE_INSERT + 2.0 * DOUBLE_COVER_BLEED,
            DOUBLE_INSERT + 2.0 * DOUBLE_COVER_BLEED,
        ),
        Purpose::CdInsert,
    )
    .with_z(2),
];

pub static LAYOUTS: [Layout; 3] = [
    Layout::specialty(
        Category::Cds,
        "cover-only",
        ExplicitRule::new(
            size(
                INSERT + 2.0 * COVER_ONLY_BORDER,
                INSERT + 2.0 * COVER_ONLY_BORDER,
            ),
            Inches::inches(COVER_ONLY_BORDER),
            Composition::Rectangles,
            &COVER_ONLY,
        ),
    ),
    Layout::specialty(
        Category::Cds,
        "disc-with-cover",
        ExplicitRule::new(
            size(
                SINGLE_ARTWORK.0 + 2.0 * SINGLE_BORDER,
                SINGLE_ARTWORK.1 + 2.0 * SINGLE_BORDER,
            ),
            Inches::inches(SINGLE_BORDER),
            Composition::RectWithCircle,
            &DISC_WITH_COVER,
        )
        .with_nameplate_clearance(Inches::inches(SINGLE_NAMEPLATE_CLEARANCE)),
    ),
    Layout::specialty(
        Category::Cds,
        "double-disc",
        ExplicitRule::new(
            size(
                DOUBLE_ARTWORK.0 + 2.0 * DOUBLE_BORDER,
                DOUBLE_ARTWORK.1 + 2.0 * DOUBLE_BORDER,
            ),
            Inches::inches(DOUBLE_BORDER),
            Composition::RectWithTwoCircles,
            &DOUBLE_DISC_OPENINGS,
        )
        .with_nameplate_clearance(Inches::inches(DOUBLE_NAMEPLATE_CLEARANCE)),
    ),
];
