//! Wedding invitations.
//!
//! Windows are cut slightly under the card so the mat overlaps every edge.
//! Two-window layouts sit side by side, each centred on the taller window.

use super::{
    Arrangement, Category, Format, Layout, LayoutGroup, PairRule, PlaqueStyle, Profile, size,
};
use crate::defaults::{
    MAT_BORDER, MAT_REVEAL, MOLDING, SMALL_NAMEPLATE_HEIGHT, SMALL_NAMEPLATE_WIDTH,
};
use crate::types::{Length as Inches, Size, SizeIn};

/// Mat overlap on each edge of a card
pub const MAT_OVERLAP: Inches = Inches::inches(0.125);
/// Horizontal gap between the two windows
pub const OPENING_SPACING: Inches = Inches::inches(1.0);
/// Invitation frames grow less than grid frames for a plaque
pub const PLAQUE_EXTENSION: Inches = Inches::inches(0.75);

pub const PHOTO: SizeIn = size(5.0, 7.0);
pub const RSVP: SizeIn = size(3.5, 5.0);

pub static FORMATS: [Format; 8] = [
    invitation("size-3.5x5", "3.5×5\" enclosure", 3.5, 5.0),
    invitation("size-4x6", "4×6\" details card", 4.0, 6.0),
    invitation("size-4.25x5.5", "4.25×5.5\" A2", 4.25, 5.5),
    invitation("size-4.5x6.25", "4.5×6.25\" A6", 4.5, 6.25),
    invitation("size-5x7", "5×7\" standard", 5.0, 7.0),
    invitation("size-5.5x7.5", "5.5×7.5\" boutique", 5.5, 7.5),
    invitation("size-5x5", "5×5\" square", 5.0, 5.0),
    invitation("size-6x6", "6×6\" square", 6.0, 6.0),
];

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

pub static LAYOUTS: [Layout; 3] = [
    pair("invite-only", LayoutGroup::Single, None),
    pair("invite-photo", LayoutGroup::Row, Some(PHOTO)),
    pair("invite-rsvp", LayoutGroup::Row, Some(RSVP)),
];

const fn invitation(id: &'static str, name: &'static str, w: f64, h: f64) -> Format {
    Format {
        id,
        category: Category::Wedding,
        name,
        size: size(w, h),
        depth: None,
        diameter: None,
        oversize: false,
    }
}

const fn pair(id: &'static str, group: LayoutGroup, secondary: Option<SizeIn>) -> Layout {
    Layout {
        id,
        category: Category::Wedding,
        group,
        arrangement: Arrangement::SideBySide(PairRule {
            secondary,
            spacing: OPENING_SPACING,
            overlap: MAT_OVERLAP,
        }),
    }
}
