//! Magazines.
//!
//! Gaps scale per axis: horizontal gaps follow the magazine width, vertical
//! gaps its height. The size limit is the mat sheet itself, in either
//! orientation.

use super::{
    Arrangement, Category, Format, GapRule, GridRule, Layout, LayoutGroup, PlaqueStyle, Profile,
    SizeLimit, size,
};
use crate::defaults::{
    GRID_NAMEPLATE_HEIGHT, GRID_NAMEPLATE_WIDTH, GRID_SPACING_FACTOR, MAT_BORDER, MAT_REVEAL,
    PLAQUE_EXTENSION,
};
use crate::types::{Length as Inches, Size};

/// Magazine frames use a wider moulding than the other grid products
pub const MAGAZINE_MOLDING: Inches = Inches::inches(1.5);

/// Largest mat sheet stocked
pub const SHEET_SHORT: Inches = Inches::inches(32.0);
pub const SHEET_LONG: Inches = Inches::inches(40.0);

pub static FORMATS: [Format; 15] = [
    magazine("compact-55x75", "Compact digest size", 5.5, 7.5),
    magazine("compact-7x10", "Small format", 7.0, 10.0),
    magazine("standard-8x105", "Classic standard size", 8.0, 10.5),
    magazine("standard-8x11", "Tall standard format", 8.0, 11.0),
    magazine("standard-825x11", "Sports Illustrated format", 8.25, 11.0),
    magazine("standard-letter", "Letter-size format", 8.5, 11.0),
    magazine("standard-875x11", "Vogue format", 8.75, 11.0),
    magazine("standard-9x11", "Wide fashion format", 9.0, 11.0),
    magazine("large-10x105", "Square business format", 10.0, 10.5),
    magazine("large-10x12", "Large tabloid format", 10.0, 12.0),
    magazine("large-10x14", "W Magazine format", 10.0, 14.0),
    magazine("large-105x12", "Classic tabloid format", 10.5, 12.0),
    magazine("large-105x13", "Saturday Evening Post format", 10.5, 13.0),
    magazine("large-105x14", "Life magazine format", 10.5, 14.0),
    magazine("large-11x14", "Oversized tabloid format", 11.0, 14.0),
];

pub static PROFILE: Profile = Profile {
    border: MAT_BORDER,
    reveal: MAT_REVEAL,
    molding: MAGAZINE_MOLDING,
    plaque: PlaqueStyle::Extension {
        extension: PLAQUE_EXTENSION,
        plate: Size::new(GRID_NAMEPLATE_WIDTH, GRID_NAMEPLATE_HEIGHT),
    },
    limit: Some(SizeLimit::Sheet {
        short: SHEET_SHORT,
        long: SHEET_LONG,
    }),
    outer_rounding: None,
};

pub static LAYOUTS: [Layout; 45] = [
    grid("single", 1, 1),
    grid("2-horizontal", 1, 2),
    grid("3-horizontal", 1, 3),
    grid("4-horizontal", 1, 4),
    grid("5-horizontal", 1, 5),
    grid("6-horizontal", 1, 6),
    grid("7-horizontal", 1, 7),
    grid("2-vertical", 2, 1),
    grid("3-vertical", 3, 1),
    grid("4-vertical", 4, 1),
    grid("5-vertical", 5, 1),
    grid("6-vertical", 6, 1),
    grid("7-vertical", 7, 1),
    grid("4-quad", 2, 2),
    grid("6-quad", 2, 3),
    grid("6-grid", 3, 2),
    grid("9-grid", 3, 3),
    grid("8-grid-2x4", 2, 4),
    grid("8-grid-4x2", 4, 2),
    grid("10-grid-2x5", 2, 5),
    grid("10-grid-5x2", 5, 2),
    grid("12-grid-3x4", 3, 4),
    grid("12-grid-4x3", 4, 3),
    grid("15-grid-3x5", 3, 5),
    grid("15-grid-5x3", 5, 3),
    grid("16-grid", 4, 4),
    grid("18-grid-3x6", 3, 6),
    grid("18-grid-6x3", 6, 3),
    grid("20-grid-4x5", 4, 5),
    grid("20-grid-5x4", 5, 4),
    grid("12-grid-2x6", 2, 6),
    grid("12-grid-6x2", 6, 2),
    grid("14-grid-2x7", 2, 7),
    grid("14-grid-7x2", 7, 2),
    grid("21-grid-3x7", 3, 7),
    grid("21-grid-7x3", 7, 3),
    grid("24-grid-3x8", 3, 8),
    grid("24-grid-4x6", 4, 6),
    grid("24-grid-6x4", 6, 4),
    grid("24-grid-8x3", 8, 3),
    grid("25-grid", 5, 5),
    grid("28-grid-4x7", 4, 7),
    grid("28-grid-7x4", 7, 4),
    grid("30-grid-5x6", 5, 6),
    grid("30-grid-6x5", 6, 5),
];

const fn magazine(id: &'static str, name: &'static str, w: f64, h: f64) -> Format {
    Format {
        id,
        category: Category::Magazines,
        name,
        size: size(w, h),
        depth: None,
        diameter: None,
        oversize: false,
    }
}

const fn grid(id: &'static str, rows: u32, columns: u32) -> Layout {
    Layout {
        id,
        category: Category::Magazines,
        group: LayoutGroup::for_grid(rows, columns),
        arrangement: Arrangement::Grid(GridRule {
            rows,
            columns,
            count: rows * columns,
            spacing_factor: if rows * columns == 1 {
                0.0
            } else {
                GRID_SPACING_FACTOR
            },
            gap: GapRule::PerAxis,
            nominal: None,
        }),
    }
}
