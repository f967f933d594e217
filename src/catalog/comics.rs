//! Comic books, raw and slabbed.
//!
//! Nominal frames come from the shop's tested rabbet table (interior opening
//! of the moulding), with the frame face added on every side.

use super::{
    Arrangement, Category, Format, GapRule, GridRule, Layout, LayoutGroup, NominalFrame,
    PlaqueStyle, Profile, SizeLimit, size,
};
use crate::defaults::{
    GRID_NAMEPLATE_HEIGHT, GRID_NAMEPLATE_WIDTH, GRID_SPACING_FACTOR, MAT_BORDER, MAT_REVEAL,
    MOLDING, PLAQUE_EXTENSION,
};
use crate::types::{Length as Inches, Size};

/// Shadowbox face width added to each side of a rabbet size
pub const FRAME_FACE: Inches = Inches::inches(1.0);

pub const MAX_FRAME: Inches = Inches::inches(48.0);

pub static FORMATS: [Format; 5] = [
    comic("golden-age", "Golden Age (1938-1956)", 7.0, 10.25),
    comic("silver-age", "Silver Age (1957-1970)", 6.75, 10.25),
    comic("bronze-age", "Bronze Age (1971-1984)", 6.75, 10.25),
    comic("modern-age", "Modern Age (1985-present)", 6.625, 10.25),
    Format {
        id: "slabbed-cgc",
        category: Category::Comics,
        name: "Slabbed comic (CGC/PGX/CBCS)",
        size: size(8.25, 13.0),
        depth: Some(Inches::inches(0.75)),
        diameter: None,
        oversize: true,
    },
];

pub static PROFILE: Profile = Profile {
    border: MAT_BORDER,
    reveal: MAT_REVEAL,
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

// Rabbet sizes: raw books first, slabs second.
pub static LAYOUTS: [Layout; 12] = [
    grid("single", 1, 1, (10.0, 14.0), (12.0, 17.0)),
    grid("2-horizontal", 1, 2, (18.0, 14.0), (21.0, 17.0)),
    grid("3-horizontal", 1, 3, (28.75, 14.0), (30.0, 16.5)),
    grid("4-horizontal", 1, 4, (37.5, 14.0), (39.0, 16.5)),
    grid("5-horizontal", 1, 5, (44.0, 14.0), (44.0, 15.0)),
    grid("6-horizontal", 1, 6, (51.0, 14.0), (54.0, 16.0)),
    grid("3-vertical", 3, 1, (11.25, 36.0), (11.75, 43.5)),
    grid("4-vertical", 4, 1, (11.25, 47.0), (11.75, 57.0)),
    grid("4-quad", 2, 2, (20.0, 25.0), (20.75, 30.5)),
    grid("6-quad", 2, 3, (29.0, 26.0), (30.0, 30.0)),
    grid("6-grid", 3, 2, (20.0, 38.5), (20.75, 44.5)),
    grid("8-grid", 2, 4, (37.5, 26.5), (39.0, 30.5)),
];

const fn comic(id: &'static str, name: &'static str, w: f64, h: f64) -> Format {
    Format {
        id,
        category: Category::Comics,
        name,
        size: size(w, h),
        depth: None,
        diameter: None,
        oversize: false,
    }
}

const fn grid(
    id: &'static str,
    rows: u32,
    columns: u32,
    raw: (f64, f64),
    slabbed: (f64, f64),
) -> Layout {
    Layout {
        id,
        category: Category::Comics,
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
            gap: GapRule::Uniform,
            nominal: Some(NominalFrame {
                standard: Some(size(raw.0, raw.1)),
                oversize: Some(size(slabbed.0, slabbed.1)),
                face: FRAME_FACE,
            }),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{lookup_format, lookup_layout};

    #[test]
    fn nominal_frame_adds_face_to_rabbet() {
        let layout = lookup_layout(Category::Comics, "4-quad").unwrap();
        let Arrangement::Grid(rule) = &layout.arrangement else {
            unreachable!()
        };
        let nominal = rule.nominal.unwrap();
        let modern = lookup_format(Category::Comics, "modern-age").unwrap();
        let slab = lookup_format(Category::Comics, "slabbed-cgc").unwrap();
        assert_eq!(nominal.outer_for(modern), Some(size(22.0, 27.0)));
        assert_eq!(nominal.outer_for(slab), Some(size(22.75, 32.5)));
    }

    #[test]
    fn only_slabs_are_oversize() {
        let oversize: Vec<_> = FORMATS.iter().filter(|f| f.oversize).map(|f| f.id).collect();
        assert_eq!(oversize, ["slabbed-cgc"]);
    }
}
