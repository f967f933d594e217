//! Grid opening calculator.
//!
//! Lays out `rows × columns` identical openings inside a mat border. Openings
//! come out in row-major order; callers bind per-opening images by index, so
//! the order is part of the contract.

use crate::catalog::GapRule;
use crate::errors::ValidationError;
use crate::types::{Length as Inches, PercentRect, Rect, RectIn, Size, SizeIn};

/// Everything the calculator needs, already resolved from the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub rows: u32,
    pub columns: u32,
    pub count: u32,
    pub item: SizeIn,
    /// Fraction of the item size used as the gap between cells
    pub spacing_factor: f64,
    pub gap: GapRule,
    pub border: Inches,
    /// Added to the bottom border only (bottom-weighted mats)
    pub bottom_extra: Inches,
}

/// Calculator output in inches
#[derive(Debug, Clone, PartialEq)]
pub struct GridOpenings {
    pub interior: SizeIn,
    /// Horizontal and vertical gap between neighbouring openings
    pub gap: SizeIn,
    /// Row-major: top to bottom, left to right within a row
    pub openings: Vec<RectIn>,
}

impl GridOpenings {
    /// Openings as percentages of the interior, same order
    pub fn percentages(&self) -> Option<Vec<PercentRect>> {
        self.openings
            .iter()
            .map(|r| PercentRect::from_rect(r, self.interior))
            .collect()
    }
}

pub fn compute_grid(spec: &GridSpec) -> Result<GridOpenings, ValidationError> {
    let GridSpec {
        rows,
        columns,
        count,
        item,
        spacing_factor,
        gap,
        border,
        bottom_extra,
    } = *spec;

    if rows == 0 || columns == 0 || count == 0 {
        return Err(ValidationError::EmptyGrid { rows, columns });
    }
    if rows.checked_mul(columns) != Some(count) {
        return Err(ValidationError::CountMismatch {
            count,
            rows,
            columns,
        });
    }
    Inches::try_positive(item.w.raw()).map_err(ValidationError::numeric("item width"))?;
    Inches::try_positive(item.h.raw()).map_err(ValidationError::numeric("item height"))?;
    Inches::try_non_negative(border.raw()).map_err(ValidationError::numeric("mat border"))?;
    Inches::try_non_negative(bottom_extra.raw())
        .map_err(ValidationError::numeric("bottom weight"))?;
    Inches::try_non_negative(spacing_factor).map_err(ValidationError::numeric("spacing factor"))?;

    let gap = match gap {
        GapRule::Uniform => Size::new(item.w * spacing_factor, item.w * spacing_factor),
        GapRule::PerAxis => Size::new(item.w * spacing_factor, item.h * spacing_factor),
    };

    let (cols, rws) = (f64::from(columns), f64::from(rows));
    let content = Size::new(
        item.w * cols + gap.w * (cols - 1.0),
        item.h * rws + gap.h * (rws - 1.0),
    );
    let interior = Size::new(
        content.w + border * 2.0,
        content.h + border * 2.0 + bottom_extra,
    );

    let step_x = item.w + gap.w;
    let step_y = item.h + gap.h;
    let openings = (0..rows)
        .flat_map(|r| (0..columns).map(move |c| (r, c)))
        .map(|(r, c)| {
            Rect::new(
                border + step_x * f64::from(c),
                border + step_y * f64::from(r),
                item.w,
                item.h,
            )
        })
        .collect();

    crate::log::debug!(rows, columns, w = %interior.w, h = %interior.h, "grid computed");

    Ok(GridOpenings {
        interior,
        gap,
        openings,
    })
}
