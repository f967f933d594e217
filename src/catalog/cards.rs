//! Graded trading card slabs.
//!
//! Layout ids are `RxC` (rows by columns). Each layout carries the nominal
//! outer frame for standard slabs and, where the shop builds it, for pack
//! slabs; manufacturability is screened against those sizes.

use super::{
    Arrangement, Category, Exclusion, Format, GapRule, GridRule, Layout, LayoutGroup,
    NominalFrame, PlaqueStyle, Profile, SizeLimit, opt_size, size,
};
use crate::defaults::{
    GRID_NAMEPLATE_HEIGHT, GRID_NAMEPLATE_WIDTH, GRID_SPACING_FACTOR, MAT_BORDER, MOLDING,
    PLAQUE_EXTENSION,
};
use crate::types::{Length as Inches, Size};

/// Cards sit close to the inner mat, so the reveal is half the usual
pub const CARD_REVEAL: Inches = Inches::inches(0.125);

pub const MAX_FRAME: Inches = Inches::inches(56.0);

pub static FORMATS: [Format; 3] = [
    slab("psa", "PSA", 3.0, 5.25, 0.3, false),
    slab("sgc-cgc-bgs", "SGC / CGC / BGS", 3.25, 5.375, 0.3, false),
    slab("psa-pack-slabs", "PSA Pack Slabs", 4.4, 7.4, 0.5, true),
];

pub static PROFILE: Profile = Profile {
    border: MAT_BORDER,
    reveal: CARD_REVEAL,
    molding: MOLDING,
    plaque: PlaqueStyle::Extension {
        extension: PLAQUE_EXTENSION,
        plate: Size::new(GRID_NAMEPLATE_WIDTH, GRID_NAMEPLATE_HEIGHT),
    },
    limit: Some(SizeLimit::Frame {
        max: Size::new(MAX_FRAME, MAX_FRAME),
    }),
    outer_rounding: None,
};

pub static LAYOUTS: [Layout; 33] = [
    grid("1x1", 1, 1, (6.0, 6.0), Some((7.0, 10.0))),
    // Rows
    grid("1x2", 1, 2, (10.0, 6.0), Some((13.0, 10.0))),
    grid("1x3", 1, 3, (14.0, 6.0), Some((18.0, 10.0))),
    grid("1x4", 1, 4, (18.0, 6.0), Some((23.0, 10.0))),
    grid("1x5", 1, 5, (22.0, 6.0), Some((28.0, 10.0))),
    grid("1x6", 1, 6, (26.0, 6.0), Some((33.0, 10.0))),
    grid("1x7", 1, 7, (30.0, 6.0), Some((38.0, 10.0))),
    grid("1x8", 1, 8, (34.0, 6.0), Some((42.0, 10.0))),
    grid("1x9", 1, 9, (38.0, 6.0), Some((47.0, 10.0))),
    // Stacks
    grid("2x1", 2, 1, (6.0, 14.0), Some((7.0, 20.0))),
    grid("3x1", 3, 1, (6.0, 20.0), Some((7.0, 28.0))),
    grid("4x1", 4, 1, (6.0, 26.0), Some((7.0, 35.0))),
    grid("5x1", 5, 1, (6.0, 32.0), Some((7.0, 43.0))),
    grid("6x1", 6, 1, (6.0, 38.0), Some((7.0, 51.0))),
    grid("7x1", 7, 1, (6.0, 44.0), None),
    grid("8x1", 8, 1, (6.0, 50.0), None),
    grid("9x1", 9, 1, (6.0, 56.0), None),
    // Grids
    grid("2x2", 2, 2, (10.0, 14.0), Some((13.0, 20.0))),
    grid("2x3", 2, 3, (14.0, 14.0), Some((18.0, 20.0))),
    grid("3x2", 3, 2, (10.0, 20.0), Some((13.0, 28.0))),
    grid("2x4", 2, 4, (18.0, 14.0), Some((23.0, 20.0))),
    grid("4x2", 4, 2, (10.0, 26.0), Some((13.0, 35.0))),
    grid("3x3", 3, 3, (14.0, 20.0), Some((18.0, 28.0))),
    grid("2x5", 2, 5, (22.0, 14.0), Some((28.0, 20.0))),
    grid("3x4", 3, 4, (18.0, 20.0), Some((23.0, 28.0))),
    grid("4x3", 4, 3, (14.0, 26.0), Some((18.0, 35.0))),
    grid("2x6", 2, 6, (26.0, 14.0), Some((33.0, 20.0))),
    grid("2x7", 2, 7, (30.0, 14.0), Some((38.0, 20.0))),
    grid("2x8", 2, 8, (34.0, 14.0), None),
    grid("2x9", 2, 9, (38.0, 14.0), None),
    grid("3x5", 3, 5, (22.0, 20.0), Some((28.0, 28.0))),
    grid("4x4", 4, 4, (18.0, 26.0), Some((23.0, 35.0))),
    grid("4x5", 4, 5, (22.0, 26.0), Some((28.0, 35.0))),
];

const PACK_SLAB_REASON: &str = "not offered for pack slabs";

pub static EXCLUSIONS: [Exclusion; 5] = [
    pack_slab_exclusion("7x1"),
    pack_slab_exclusion("8x1"),
    pack_slab_exclusion("9x1"),
    pack_slab_exclusion("2x8"),
    pack_slab_exclusion("2x9"),
];

const fn slab(
    id: &'static str,
    name: &'static str,
    w: f64,
    h: f64,
    depth: f64,
    oversize: bool,
) -> Format {
    Format {
        id,
        category: Category::Cards,
        name,
        size: size(w, h),
        depth: Some(Inches::inches(depth)),
        diameter: None,
        oversize,
    }
}

const fn grid(
    id: &'static str,
    rows: u32,
    columns: u32,
    standard: (f64, f64),
    pack: Option<(f64, f64)>,
) -> Layout {
    let spacing_factor = if rows * columns == 1 {
        0.0
    } else {
        GRID_SPACING_FACTOR
    };
    Layout {
        id,
        category: Category::Cards,
        group: LayoutGroup::for_grid(rows, columns),
        arrangement: Arrangement::Grid(GridRule {
            rows,
            columns,
            count: rows * columns,
            spacing_factor,
            gap: GapRule::PerAxis,
            nominal: Some(NominalFrame {
                standard: Some(size(standard.0, standard.1)),
                oversize: opt_size(pack),
                face: Inches::ZERO,
            }),
        }),
    }
}

const fn pack_slab_exclusion(layout: &'static str) -> Exclusion {
    Exclusion {
        format: Some("psa-pack-slabs"),
        layout,
        with_plaque_only: false,
        reason: PACK_SLAB_REASON,
    }
}
