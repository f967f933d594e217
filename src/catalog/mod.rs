//! Format and layout catalog.
//!
//! Each product category is a pure data module: a table of [`Format`]s (the
//! physical item), a table of [`Layout`]s (how openings are arranged), a
//! [`Profile`] with the category's defaults and limits, and any
//! format/layout pairs the shop does not build. Lookups are strict: an unknown
//! id is a [`NotFoundError`], never a silent default.

pub mod cards;
pub mod cds;
pub mod comics;
pub mod jerseys;
pub mod magazines;
pub mod playbills;
pub mod records;
pub mod wedding;

use std::fmt;

use crate::cutout::{CircleCutout, Opening, RectCutout};
use crate::errors::{EngineError, LookupKind, NotFoundError};
use crate::manifest::ManifestRequest;
use crate::types::{Length as Inches, Point, Size, SizeIn};
use crate::validate::validate_layout;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Graded trading card slabs
    Cards,
    Comics,
    Magazines,
    /// Vinyl records with sleeves
    Records,
    Cds,
    Jerseys,
    /// Wedding invitations, optionally with a photo or RSVP card
    Wedding,
    /// Theatre playbills and ticket stubs
    Playbills,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Cards,
        Category::Comics,
        Category::Magazines,
        Category::Records,
        Category::Cds,
        Category::Jerseys,
        Category::Wedding,
        Category::Playbills,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Cards => "cards",
            Category::Comics => "comics",
            Category::Magazines => "magazines",
            Category::Records => "records",
            Category::Cds => "cds",
            Category::Jerseys => "jerseys",
            Category::Wedding => "wedding",
            Category::Playbills => "playbills",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn formats(self) -> &'static [Format] {
        match self {
            Category::Cards => &cards::FORMATS,
            Category::Comics => &comics::FORMATS,
            Category::Magazines => &magazines::FORMATS,
            Category::Records => &records::FORMATS,
            Category::Cds => &cds::FORMATS,
            Category::Jerseys => &jerseys::FORMATS,
            Category::Wedding => &wedding::FORMATS,
            Category::Playbills => &playbills::FORMATS,
        }
    }

    pub fn layouts(self) -> &'static [Layout] {
        match self {
            Category::Cards => &cards::LAYOUTS,
            Category::Comics => &comics::LAYOUTS,
            Category::Magazines => &magazines::LAYOUTS,
            Category::Records => &records::LAYOUTS,
            Category::Cds => &cds::LAYOUTS,
            Category::Jerseys => &jerseys::LAYOUTS,
            Category::Wedding => &wedding::LAYOUTS,
            Category::Playbills => &playbills::LAYOUTS,
        }
    }

    pub fn profile(self) -> &'static Profile {
        match self {
            Category::Cards => &cards::PROFILE,
            Category::Comics => &comics::PROFILE,
            Category::Magazines => &magazines::PROFILE,
            Category::Records => &records::PROFILE,
            Category::Cds => &cds::PROFILE,
            Category::Jerseys => &jerseys::PROFILE,
            Category::Wedding => &wedding::PROFILE,
            Category::Playbills => &playbills::PROFILE,
        }
    }

    pub fn exclusions(self) -> &'static [Exclusion] {
        match self {
            Category::Cards => &cards::EXCLUSIONS,
            Category::Jerseys => &jerseys::EXCLUSIONS,
            _ => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A physical item's fixed dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Format {
    pub id: &'static str,
    pub category: Category,
    pub name: &'static str,
    pub size: SizeIn,
    /// Slab or case depth
    pub depth: Option<Inches>,
    /// Disc diameter for records and CDs
    pub diameter: Option<Inches>,
    /// Reads the oversize column of nominal frame tables (pack slabs, graded comics)
    pub oversize: bool,
}

/// Gallery grouping for layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutGroup {
    Single,
    Row,
    Stack,
    Grid,
    /// Fixed arrangements that don't read as rows or grids (records, CDs, jerseys)
    Specialty,
}

impl LayoutGroup {
    /// Group a grid by its shape: one row, one column, or both.
    pub(crate) const fn for_grid(rows: u32, columns: u32) -> LayoutGroup {
        match (rows, columns) {
            (1, 1) => LayoutGroup::Single,
            (1, _) => LayoutGroup::Row,
            (_, 1) => LayoutGroup::Stack,
            _ => LayoutGroup::Grid,
        }
    }
}

/// A named arrangement of openings for one category
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub id: &'static str,
    pub category: Category,
    pub group: LayoutGroup,
    pub arrangement: Arrangement,
}

impl Layout {
    pub(crate) const fn specialty(category: Category, id: &'static str, rule: ExplicitRule) -> Self {
        Layout {
            id,
            category,
            group: LayoutGroup::Specialty,
            arrangement: Arrangement::Explicit(rule),
        }
    }

    /// Openings a finished mat will have
    pub fn opening_count(&self) -> usize {
        match &self.arrangement {
            Arrangement::Grid(rule) => rule.count as usize,
            Arrangement::Explicit(rule) => rule.openings.len(),
            Arrangement::SideBySide(rule) => 1 + usize::from(rule.secondary.is_some()),
        }
    }
}

/// How a layout places its openings
#[derive(Debug, Clone, PartialEq)]
pub enum Arrangement {
    /// Identical openings in rows and columns, computed from the format
    Grid(GridRule),
    /// Openings fixed by the table, independent of the format
    Explicit(ExplicitRule),
    /// The format's window next to an optional companion window
    SideBySide(PairRule),
}

/// How the gap between grid cells is derived from the spacing factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapRule {
    /// Item width × factor on both axes
    Uniform,
    /// Item width × factor across, item height × factor down
    PerAxis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRule {
    pub rows: u32,
    pub columns: u32,
    pub count: u32,
    pub spacing_factor: f64,
    pub gap: GapRule,
    pub nominal: Option<NominalFrame>,
}

/// Precomputed frame sizes used for quick manufacturability screening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NominalFrame {
    pub standard: Option<SizeIn>,
    pub oversize: Option<SizeIn>,
    /// Added on every side of the table size (frame face for rabbet tables)
    pub face: Inches,
}

impl NominalFrame {
    /// Outer frame for `format`, `None` when the table has no entry for it
    pub fn outer_for(&self, format: &Format) -> Option<SizeIn> {
        let base = if format.oversize {
            self.oversize
        } else {
            self.standard
        }?;
        Some(base.outset(self.face))
    }
}

/// How openings of an explicit layout combine into mat contours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// Independent holes
    Rectangles,
    /// A rectangle merged with one circle on its right edge
    RectWithCircle,
    /// A rectangle merged with two chained circles
    RectWithTwoCircles,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitRule {
    pub interior: SizeIn,
    pub mat_border: Inches,
    /// Overrides the category reveal when set
    pub mat_reveal: Option<Inches>,
    pub composition: Composition,
    pub openings: &'static [Opening],
    /// Vertical nudge applied to the nameplate on this layout
    pub nameplate_clearance: Inches,
}

impl ExplicitRule {
    pub(crate) const fn new(
        interior: SizeIn,
        mat_border: Inches,
        composition: Composition,
        openings: &'static [Opening],
    ) -> Self {
        ExplicitRule {
            interior,
            mat_border,
            mat_reveal: None,
            composition,
            openings,
            nameplate_clearance: Inches::ZERO,
        }
    }

    pub(crate) const fn with_reveal(mut self, reveal: Inches) -> Self {
        self.mat_reveal = Some(reveal);
        self
    }

    pub(crate) const fn with_nameplate_clearance(mut self, clearance: Inches) -> Self {
        self.nameplate_clearance = clearance;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairRule {
    /// Companion card or photo, `None` for a lone window
    pub secondary: Option<SizeIn>,
    pub spacing: Inches,
    /// Mat overlap on each edge of every window
    pub overlap: Inches,
}

/// How a category adds a brass plaque
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaqueStyle {
    /// Plate mounted on the mat below the openings; the interior grows by `extension`
    Extension { extension: Inches, plate: SizeIn },
    /// Plate sits in one of the layout's own openings
    CutOpening,
}

/// Largest product the shop can build
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeLimit {
    /// Outer frame bound, checked against nominal frame sizes
    Frame { max: SizeIn },
    /// Mat sheet bound, either orientation
    Sheet { short: Inches, long: Inches },
}

/// Per-category defaults and limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub border: Inches,
    pub reveal: Inches,
    pub molding: Inches,
    pub plaque: PlaqueStyle,
    pub limit: Option<SizeLimit>,
    /// Outer frame sizes are rounded to this step
    pub outer_rounding: Option<Inches>,
}

impl Profile {
    /// Extra interior height a plaque adds
    pub fn plaque_extension(&self) -> Inches {
        match self.plaque {
            PlaqueStyle::Extension { extension, .. } => extension,
            PlaqueStyle::CutOpening => Inches::ZERO,
        }
    }
}

/// A format/layout pair the shop does not build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exclusion {
    /// `None` matches every format
    pub format: Option<&'static str>,
    pub layout: &'static str,
    /// Only excluded when a plaque is ordered
    pub with_plaque_only: bool,
    pub reason: &'static str,
}

impl Exclusion {
    pub fn matches(&self, format_id: &str, layout_id: &str, plaque: bool) -> bool {
        self.layout == layout_id
            && self.format.is_none_or(|f| f == format_id)
            && (plaque || !self.with_plaque_only)
    }
}

/// First exclusion hit by this combination
pub fn find_exclusion(
    category: Category,
    format_id: &str,
    layout_id: &str,
    plaque: bool,
) -> Option<&'static Exclusion> {
    category
        .exclusions()
        .iter()
        .find(|e| e.matches(format_id, layout_id, plaque))
}

pub fn lookup_format(category: Category, id: &str) -> Result<&'static Format, NotFoundError> {
    let formats = category.formats();
    formats.iter().find(|f| f.id == id).ok_or_else(|| {
        NotFoundError::new(
            LookupKind::Format,
            category,
            id,
            formats.iter().map(|f| f.id),
        )
    })
}

pub fn lookup_layout(category: Category, id: &str) -> Result<&'static Layout, NotFoundError> {
    let layouts = category.layouts();
    layouts.iter().find(|l| l.id == id).ok_or_else(|| {
        NotFoundError::new(
            LookupKind::Layout,
            category,
            id,
            layouts.iter().map(|l| l.id),
        )
    })
}

/// Narrows [`list_layouts`]
#[derive(Debug, Clone, Default)]
pub struct LayoutFilter {
    group: Option<LayoutGroup>,
    available_for: Option<ManifestRequest>,
}

impl LayoutFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, group: LayoutGroup) -> Self {
        self.group = Some(group);
        self
    }

    /// Keep only layouts that pass validation for the request's format and
    /// options. The request's layout id is ignored.
    pub fn available_for(mut self, request: ManifestRequest) -> Self {
        self.available_for = Some(request);
        self
    }
}

/// Layouts of `category` in table order, optionally filtered.
///
/// Fails only when the availability request names an unknown format or
/// carries malformed numbers.
pub fn list_layouts(
    category: Category,
    filter: &LayoutFilter,
) -> Result<Vec<&'static Layout>, EngineError> {
    let mut out = Vec::new();
    for layout in category.layouts() {
        if filter.group.is_some_and(|g| g != layout.group) {
            continue;
        }
        if let Some(request) = &filter.available_for {
            let candidate = request.clone().for_layout(category, layout.id);
            if !validate_layout(&candidate)?.is_valid() {
                continue;
            }
        }
        out.push(layout);
    }
    Ok(out)
}

// ============================================================================
// Table helpers
// ============================================================================

pub(crate) const fn size(w: f64, h: f64) -> SizeIn {
    Size::new(Inches::inches(w), Inches::inches(h))
}

pub(crate) const fn rect(x: f64, y: f64, w: f64, h: f64) -> RectCutout {
    RectCutout::new(
        Inches::inches(x),
        Inches::inches(y),
        Inches::inches(w),
        Inches::inches(h),
    )
}

pub(crate) const fn disc(cx: f64, cy: f64, diameter: f64) -> CircleCutout {
    CircleCutout::new(
        Point::new(Inches::inches(cx), Inches::inches(cy)),
        Inches::inches(diameter),
    )
}

pub(crate) const fn opt_size(dims: Option<(f64, f64)>) -> Option<SizeIn> {
    match dims {
        Some((w, h)) => Some(size(w, h)),
        None => None,
    }
}
