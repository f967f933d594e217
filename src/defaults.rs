//! Default sizes and shop constants (all in inches)

use crate::types::Length as Inches;

/// Float tolerance for geometry comparisons, in inches
pub const TOLERANCE: f64 = 1e-6;

pub const MAT_BORDER: Inches = Inches::inches(2.0);
pub const MAT_REVEAL: Inches = Inches::inches(0.25);
/// Thinnest border the mat cutter will produce
pub const MIN_MAT_BORDER: Inches = Inches::inches(0.5);
/// Frame face width on each side of the mat
pub const MOLDING: Inches = Inches::inches(1.0);

/// Extra interior height added below the openings when a plaque is ordered
pub const PLAQUE_EXTENSION: Inches = Inches::inches(1.5);
/// Distance from the bottom of the mat interior to the bottom of the plate
pub const NAMEPLATE_FROM_BOTTOM: Inches = Inches::inches(1.0);
/// Brass plate used on grid layouts
pub const GRID_NAMEPLATE_WIDTH: Inches = Inches::inches(4.5);
pub const GRID_NAMEPLATE_HEIGHT: Inches = Inches::inches(1.5);
/// Small brass plate used on record, CD and wedding frames
pub const SMALL_NAMEPLATE_WIDTH: Inches = Inches::inches(2.0);
pub const SMALL_NAMEPLATE_HEIGHT: Inches = Inches::inches(0.5);

/// Outer sizes of some frames are ordered in quarter inches
pub const QUARTER_INCH: Inches = Inches::inches(0.25);

/// Gap factor for every multi-opening grid
pub const GRID_SPACING_FACTOR: f64 = 0.15;
