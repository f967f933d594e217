//! Manifest builder.
//!
//! A [`ManifestRequest`] names a category, format and layout plus the user's
//! mat options. [`build_manifest`] resolves it against the catalog and returns
//! a fresh [`Manifest`]: every opening in inches and percent, the mat interior,
//! the outer frame, and where the brass plate goes. Manifests are plain values;
//! change an option and build a new one.

use crate::catalog::{
    self, Arrangement, Category, Composition, ExplicitRule, Format, GridRule, Layout, PairRule,
    PlaqueStyle, Profile,
};
use crate::cutout::{Cutout, Opening, Purpose, RectCutout, Shape};
use crate::defaults::NAMEPLATE_FROM_BOTTOM;
use crate::errors::{EngineError, ValidationError};
use crate::grid::{GridSpec, compute_grid};
use crate::path::{CompoundPath, mat_path};
use crate::types::{Length as Inches, PercentRect, Px, PtPx, Rect, RectIn, Scaler, Size, SizeIn};
use crate::validate::validate_border_reveal;

// ============================================================================
// Request
// ============================================================================

/// User-chosen mat options. Unset values fall back to the category profile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatOptions {
    pub border: Option<f64>,
    pub reveal: Option<f64>,
    pub plaque: bool,
    pub molding: Option<f64>,
    /// Extra bottom border for grid layouts
    pub bottom_weight: f64,
}

/// What to build: one format in one layout with the given options
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestRequest {
    pub category: Category,
    pub format_id: String,
    pub layout_id: String,
    pub options: MatOptions,
}

impl ManifestRequest {
    pub fn new(
        category: Category,
        format_id: impl Into<String>,
        layout_id: impl Into<String>,
    ) -> Self {
        ManifestRequest {
            category,
            format_id: format_id.into(),
            layout_id: layout_id.into(),
            options: MatOptions::default(),
        }
    }

    pub fn with_border(mut self, inches: f64) -> Self {
        self.options.border = Some(inches);
        self
    }

    pub fn with_reveal(mut self, inches: f64) -> Self {
        self.options.reveal = Some(inches);
        self
    }

    pub fn with_plaque(mut self, plaque: bool) -> Self {
        self.options.plaque = plaque;
        self
    }

    pub fn with_molding(mut self, inches: f64) -> Self {
        self.options.molding = Some(inches);
        self
    }

    pub fn with_bottom_weight(mut self, inches: f64) -> Self {
        self.options.bottom_weight = inches;
        self
    }

    /// Same format and options, different layout
    pub(crate) fn for_layout(mut self, category: Category, layout_id: &str) -> Self {
        self.category = category;
        self.layout_id = layout_id.to_owned();
        self
    }
}

/// A request checked against the catalog, with every option resolved
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved {
    pub format: &'static Format,
    pub layout: &'static Layout,
    pub profile: &'static Profile,
    pub border: Inches,
    pub reveal: Inches,
    pub molding: Inches,
    pub bottom_weight: Inches,
    pub plaque: bool,
}

impl Resolved {
    pub(crate) fn new(request: &ManifestRequest) -> Result<Self, EngineError> {
        let format = catalog::lookup_format(request.category, &request.format_id)?;
        let layout = catalog::lookup_layout(request.category, &request.layout_id)?;
        let profile = request.category.profile();
        let opts = &request.options;

        let requested_border = opts
            .border
            .map(Inches::try_non_negative)
            .transpose()
            .map_err(ValidationError::numeric("mat border"))?;
        let requested_reveal = opts
            .reveal
            .map(Inches::try_new)
            .transpose()
            .map_err(ValidationError::numeric("mat reveal"))?;
        let molding = match opts.molding {
            Some(m) => Inches::try_non_negative(m).map_err(ValidationError::numeric("molding"))?,
            None => profile.molding,
        };
        let bottom_weight = Inches::try_non_negative(opts.bottom_weight)
            .map_err(ValidationError::numeric("bottom weight"))?;

        let (border, table_reveal) = match &layout.arrangement {
            Arrangement::Explicit(rule) => {
                if requested_border.is_some() {
                    crate::log::warn!(
                        layout = layout.id,
                        border = ?requested_border,
                        "border is fixed by this layout, ignoring requested border"
                    );
                }
                (rule.mat_border, rule.mat_reveal)
            }
            _ => (requested_border.unwrap_or(profile.border), None),
        };

        Ok(Resolved {
            format,
            layout,
            profile,
            border,
            reveal: requested_reveal
                .or(table_reveal)
                .unwrap_or(profile.reveal),
            molding,
            bottom_weight,
            plaque: opts.plaque,
        })
    }

    /// Extra interior height the plaque adds, zero when none is ordered
    pub(crate) fn plaque_extension(&self) -> Inches {
        if self.plaque {
            self.profile.plaque_extension()
        } else {
            Inches::ZERO
        }
    }

    pub(crate) fn frame_for(&self, interior: SizeIn) -> SizeIn {
        let outer = interior.outset(self.molding);
        match self.profile.outer_rounding {
            Some(step) => Size::new(outer.w.round_to(step), outer.h.round_to(step)),
            None => outer,
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Layout geometry before percentages and nameplate placement
#[derive(Debug, Clone)]
pub(crate) struct Geometry {
    pub interior: SizeIn,
    pub openings: Vec<Opening>,
    pub composition: Composition,
    pub border_bottom: Inches,
    pub nameplate_clearance: Inches,
}

pub(crate) fn geometry(r: &Resolved) -> Result<Geometry, ValidationError> {
    let mut geometry = match &r.layout.arrangement {
        Arrangement::Grid(rule) => grid_geometry(r, rule)?,
        Arrangement::Explicit(rule) => explicit_geometry(r, rule),
        Arrangement::SideBySide(rule) => pair_geometry(r, rule)?,
    };
    geometry.interior.h += r.plaque_extension();
    Ok(geometry)
}

fn grid_geometry(r: &Resolved, rule: &GridRule) -> Result<Geometry, ValidationError> {
    let grid = compute_grid(&GridSpec {
        rows: rule.rows,
        columns: rule.columns,
        count: rule.count,
        item: r.format.size,
        spacing_factor: rule.spacing_factor,
        gap: rule.gap,
        border: r.border,
        bottom_extra: r.bottom_weight,
    })?;
    Ok(Geometry {
        interior: grid.interior,
        openings: grid
            .openings
            .into_iter()
            .map(|rect| Opening::rect(RectCutout { rect }, Purpose::Item))
            .collect(),
        composition: Composition::Rectangles,
        border_bottom: r.border + r.bottom_weight,
        nameplate_clearance: Inches::ZERO,
    })
}

fn explicit_geometry(r: &Resolved, rule: &ExplicitRule) -> Geometry {
    Geometry {
        interior: rule.interior,
        openings: rule.openings.to_vec(),
        composition: rule.composition,
        border_bottom: r.border,
        nameplate_clearance: rule.nameplate_clearance,
    }
}

fn pair_geometry(r: &Resolved, rule: &PairRule) -> Result<Geometry, ValidationError> {
    let window = |card: SizeIn, field: &'static str| -> Result<SizeIn, ValidationError> {
        let w = card.w - rule.overlap * 2.0;
        let h = card.h - rule.overlap * 2.0;
        Inches::try_positive(w.raw()).map_err(ValidationError::numeric(field))?;
        Inches::try_positive(h.raw()).map_err(ValidationError::numeric(field))?;
        Ok(Size::new(w, h))
    };
    let b = r.border;
    let primary = window(r.format.size, "invitation window")?;

    let Some(card) = rule.secondary else {
        return Ok(Geometry {
            interior: primary.outset(b),
            openings: vec![Opening::rect(
                RectCutout::new(b, b, primary.w, primary.h),
                Purpose::Invitation,
            )],
            composition: Composition::Rectangles,
            border_bottom: b,
            nameplate_clearance: Inches::ZERO,
        });
    };

    let secondary = window(card, "companion window")?;
    let tallest = primary.h.max(secondary.h);
    let secondary_x = b + primary.w + rule.spacing;
    Ok(Geometry {
        interior: Size::new(
            secondary_x + secondary.w + b,
            tallest + b * 2.0,
        ),
        openings: vec![
            Opening::rect(
                RectCutout::new(b, b + (tallest - primary.h) / 2.0, primary.w, primary.h),
                Purpose::Invitation,
            ),
            Opening::rect(
                RectCutout::new(
                    secondary_x,
                    b + (tallest - secondary.h) / 2.0,
                    secondary.w,
                    secondary.h,
                ),
                Purpose::Companion,
            ),
        ],
        composition: Composition::Rectangles,
        border_bottom: b,
        nameplate_clearance: Inches::ZERO,
    })
}

// ============================================================================
// Manifest
// ============================================================================

/// One opening, in inches and as a percentage of the mat interior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOpening {
    /// Position in the opening list; images bind by this index
    pub index: usize,
    pub cutout: Cutout,
    pub purpose: Purpose,
    pub z_index: Option<u8>,
    pub percent: PercentRect,
}

/// An opening mapped into pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PxShape {
    Rect(Rect<Px>),
    Circle { center: PtPx, radius: Px },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PxOpening {
    pub index: usize,
    pub purpose: Purpose,
    pub z_index: Option<u8>,
    pub shape: PxShape,
}

impl ResolvedOpening {
    pub fn bounds(&self) -> RectIn {
        self.cutout.bounds()
    }

    pub fn to_px(&self, scaler: &Scaler) -> PxOpening {
        let shape = match &self.cutout {
            Cutout::Rect(r) => PxShape::Rect(scaler.rect(r.rect)),
            Cutout::Circle(c) => PxShape::Circle {
                center: scaler.point(c.circle.center),
                radius: scaler.len(c.circle.radius),
            },
        };
        PxOpening {
            index: self.index,
            purpose: self.purpose,
            z_index: self.z_index,
            shape,
        }
    }
}

/// Resolved geometry for one configuration. All lengths are inches, measured
/// from the top-left corner of the mat interior.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub category: Category,
    pub format_id: &'static str,
    pub layout_id: &'static str,
    pub openings: Vec<ResolvedOpening>,
    /// Mat size, inside the moulding
    pub interior: SizeIn,
    /// Outer frame size
    pub frame: SizeIn,
    pub molding: Inches,
    pub mat_border: Inches,
    pub mat_border_bottom: Inches,
    pub mat_reveal: Inches,
    pub composition: Composition,
    /// Where the brass plate sits, when one is ordered
    pub nameplate: Option<RectIn>,
    pub plaque: bool,
}

impl Manifest {
    pub fn cutouts(&self) -> Vec<Cutout> {
        self.openings.iter().map(|o| o.cutout).collect()
    }

    /// Single-mat path: the board with every opening removed
    pub fn mat_path(&self) -> Result<CompoundPath<Inches>, ValidationError> {
        mat_path(self.interior, &self.cutouts(), self.composition)
    }
}

/// Resolve `request` and compute its manifest.
///
/// Fails on unknown ids, malformed numbers, a plaque on a layout that has no
/// place for one, or a border/reveal pair the cutter cannot produce. A layout
/// too large to manufacture still builds; see
/// [`validate_layout`](crate::validate::validate_layout).
pub fn build_manifest(request: &ManifestRequest) -> Result<Manifest, EngineError> {
    let r = Resolved::new(request)?;
    validate_border_reveal(r.border.raw(), r.reveal.raw())?;

    let geometry = geometry(&r)?;
    let interior = geometry.interior;

    let nameplate = if r.plaque {
        Some(nameplate(&r, &geometry)?)
    } else {
        None
    };

    let openings = geometry
        .openings
        .iter()
        .enumerate()
        .map(|(index, o)| {
            let percent = o.cutout.percent(interior).ok_or(ValidationError::NonPositive {
                field: "mat interior",
                value: interior.short_side().raw(),
            })?;
            Ok(ResolvedOpening {
                index,
                cutout: o.cutout,
                purpose: o.purpose,
                z_index: o.z_index,
                percent,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    let manifest = Manifest {
        category: request.category,
        format_id: r.format.id,
        layout_id: r.layout.id,
        openings,
        interior,
        frame: r.frame_for(interior),
        molding: r.molding,
        mat_border: r.border,
        mat_border_bottom: geometry.border_bottom,
        mat_reveal: r.reveal,
        composition: geometry.composition,
        nameplate,
        plaque: r.plaque,
    };

    crate::log::debug!(
        category = %manifest.category,
        layout = manifest.layout_id,
        openings = manifest.openings.len(),
        width = %manifest.interior.w,
        height = %manifest.interior.h,
        "manifest built"
    );

    Ok(manifest)
}

fn nameplate(r: &Resolved, geometry: &Geometry) -> Result<RectIn, ValidationError> {
    match r.profile.plaque {
        PlaqueStyle::Extension { plate, .. } => {
            let interior = geometry.interior;
            Ok(Rect::new(
                (interior.w - plate.w) / 2.0,
                interior.h - NAMEPLATE_FROM_BOTTOM - plate.h + geometry.nameplate_clearance,
                plate.w,
                plate.h,
            ))
        }
        PlaqueStyle::CutOpening => geometry
            .openings
            .iter()
            .find(|o| o.purpose == Purpose::Plaque)
            .map(|o| o.cutout.bounds())
            .ok_or_else(|| ValidationError::PlaqueNotOffered {
                layout: r.layout.id.to_owned(),
            }),
    }
}

// ============================================================================
// Double mats
// ============================================================================

/// Paths for a two-mat stack
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleMat {
    /// Openings at full size
    pub top: CompoundPath<Inches>,
    /// Openings shrunk by the reveal, so a ring of this mat shows
    pub bottom: CompoundPath<Inches>,
}

pub fn double_mat_paths(manifest: &Manifest) -> Result<DoubleMat, ValidationError> {
    validate_border_reveal(manifest.mat_border.raw(), manifest.mat_reveal.raw())?;
    let top = manifest.cutouts();
    let bottom: Vec<Cutout> = top.iter().map(|c| c.inset(manifest.mat_reveal)).collect();
    Ok(DoubleMat {
        top: mat_path(manifest.interior, &top, manifest.composition)?,
        bottom: mat_path(manifest.interior, &bottom, manifest.composition)?,
    })
}
