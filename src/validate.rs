//! Manufacturability and double-mat checks.
//!
//! [`validate_layout`] answers "can the shop build this?" with a [`Validity`]
//! value. Only programmer errors (unknown ids, malformed numbers) are `Err`;
//! an oversized frame or an excluded combination is an ordinary answer.

use std::fmt;

use crate::catalog::{self, Arrangement, SizeLimit};
use crate::defaults::{MIN_MAT_BORDER, TOLERANCE};
use crate::errors::{EngineError, ValidationError};
use crate::manifest::{ManifestRequest, Resolved, geometry};
use crate::types::{Length as Inches, SizeIn};

/// Why a geometrically valid layout cannot be built
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unmanufacturable {
    /// The format/layout pair is not offered
    Excluded { reason: &'static str },
    ExceedsFrameLimit { max: SizeIn },
    /// Mat larger than the biggest sheet in either orientation
    ExceedsSheetLimit { short: Inches, long: Inches },
    /// No nominal frame size is recorded for this format
    NoNominalSize,
}

impl fmt::Display for Unmanufacturable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unmanufacturable::Excluded { reason } => f.write_str(reason),
            Unmanufacturable::ExceedsFrameLimit { max } => write!(
                f,
                "exceeds maximum manufacturable size of {} × {}",
                max.w, max.h
            ),
            Unmanufacturable::ExceedsSheetLimit { short, long } => {
                write!(f, "mat exceeds the largest sheet, {short} × {long}")
            }
            Unmanufacturable::NoNominalSize => f.write_str("not offered in this size"),
        }
    }
}

/// Result of a manufacturability check.
///
/// Dimensions are the ones the limit was checked against: the outer frame,
/// or the mat for sheet-limited categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validity {
    Valid {
        width: Inches,
        height: Inches,
    },
    Invalid {
        reason: Unmanufacturable,
        width: Option<Inches>,
        height: Option<Inches>,
    },
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid { .. })
    }

    fn valid(size: SizeIn) -> Self {
        Validity::Valid {
            width: size.w,
            height: size.h,
        }
    }

    fn invalid(reason: Unmanufacturable, size: Option<SizeIn>) -> Self {
        Validity::Invalid {
            reason,
            width: size.map(|s| s.w),
            height: size.map(|s| s.h),
        }
    }
}

/// Check a request against exclusions and the category's size limit.
///
/// Exclusions are checked before any size. Frame-limited categories screen
/// the layout's nominal frame, plus the plaque extension when a plaque is
/// ordered, or the computed frame when the layout has no nominal table.
/// Sheet-limited categories screen the computed mat.
pub fn validate_layout(request: &ManifestRequest) -> Result<Validity, EngineError> {
    let r = Resolved::new(request)?;

    if let Some(exclusion) =
        catalog::find_exclusion(request.category, r.format.id, r.layout.id, r.plaque)
    {
        crate::log::debug!(
            format = r.format.id,
            layout = r.layout.id,
            reason = exclusion.reason,
            "layout rejected: excluded"
        );
        return Ok(Validity::invalid(
            Unmanufacturable::Excluded {
                reason: exclusion.reason,
            },
            None,
        ));
    }

    let validity = match r.profile.limit {
        Some(SizeLimit::Frame { max }) => check_frame(&r, max)?,
        Some(SizeLimit::Sheet { short, long }) => {
            let mat = geometry(&r)?.interior;
            let fits = mat.short_side().raw() <= short.raw() + TOLERANCE
                && mat.long_side().raw() <= long.raw() + TOLERANCE;
            if fits {
                Validity::valid(mat)
            } else {
                Validity::invalid(Unmanufacturable::ExceedsSheetLimit { short, long }, Some(mat))
            }
        }
        None => Validity::valid(r.frame_for(geometry(&r)?.interior)),
    };

    if !validity.is_valid() {
        crate::log::debug!(
            format = r.format.id,
            layout = r.layout.id,
            ?validity,
            "layout rejected"
        );
    }
    Ok(validity)
}

fn check_frame(r: &Resolved, max: SizeIn) -> Result<Validity, ValidationError> {
    let nominal = match &r.layout.arrangement {
        Arrangement::Grid(rule) => rule.nominal,
        _ => None,
    };
    // Nominal tables are plaque-free; computed geometry already carries it.
    let outer = match nominal {
        Some(table) => match table.outer_for(r.format) {
            Some(outer) => SizeIn::new(outer.w, outer.h + r.plaque_extension()),
            None => return Ok(Validity::invalid(Unmanufacturable::NoNominalSize, None)),
        },
        None => r.frame_for(geometry(r)?.interior),
    };

    if outer.w.raw() > max.w.raw() + TOLERANCE || outer.h.raw() > max.h.raw() + TOLERANCE {
        Ok(Validity::invalid(
            Unmanufacturable::ExceedsFrameLimit { max },
            Some(outer),
        ))
    } else {
        Ok(Validity::valid(outer))
    }
}

/// Check a border/reveal pair for a double mat.
///
/// The reveal must be strictly less than the border, the border at least
/// [`MIN_MAT_BORDER`], and the reveal non-negative, checked in that order.
pub fn validate_border_reveal(border: f64, reveal: f64) -> Result<(), ValidationError> {
    Inches::try_new(border).map_err(ValidationError::numeric("mat border"))?;
    Inches::try_new(reveal).map_err(ValidationError::numeric("mat reveal"))?;

    if reveal >= border {
        return Err(ValidationError::RevealNotLessThanBorder { reveal, border });
    }
    if border < MIN_MAT_BORDER.raw() {
        return Err(ValidationError::BorderBelowMinimum {
            border,
            minimum: MIN_MAT_BORDER.raw(),
        });
    }
    if reveal < 0.0 {
        return Err(ValidationError::NegativeReveal { reveal });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn close(a: Option<Inches>, b: f64) -> bool {
        a.is_some_and(|a| (a.raw() - b).abs() < TOLERANCE)
    }

    #[test]
    fn border_reveal_rules() {
        assert_eq!(
            validate_border_reveal(0.5, 0.5),
            Err(ValidationError::RevealNotLessThanBorder {
                reveal: 0.5,
                border: 0.5
            })
        );
        assert_eq!(
            validate_border_reveal(0.25, 0.125),
            Err(ValidationError::BorderBelowMinimum {
                border: 0.25,
                minimum: 0.5
            })
        );
        assert_eq!(
            validate_border_reveal(2.0, -0.1),
            Err(ValidationError::NegativeReveal { reveal: -0.1 })
        );
        assert_eq!(validate_border_reveal(2.0, 0.25), Ok(()));
        assert_eq!(validate_border_reveal(0.5, 0.0), Ok(()));
    }

    #[test]
    fn reveal_check_comes_first() {
        // both rules broken; the reveal rule wins
        assert!(matches!(
            validate_border_reveal(0.25, 0.25),
            Err(ValidationError::RevealNotLessThanBorder { .. })
        ));
    }

    #[test]
    fn nan_is_malformed_not_unmanufacturable() {
        assert!(matches!(
            validate_border_reveal(f64::NAN, 0.25),
            Err(ValidationError::Numeric { field: "mat border", .. })
        ));
    }

    #[test]
    fn longest_card_stack_fits_until_plaque() {
        let request = ManifestRequest::new(Category::Cards, "psa", "9x1");
        assert_eq!(
            validate_layout(&request).unwrap(),
            Validity::Valid {
                width: Inches(6.0),
                height: Inches(56.0)
            }
        );

        let with_plaque = validate_layout(&request.with_plaque(true)).unwrap();
        let Validity::Invalid { reason, width, height } = with_plaque else {
            panic!("expected invalid, got {with_plaque:?}");
        };
        assert!(matches!(reason, Unmanufacturable::ExceedsFrameLimit { .. }));
        assert!(close(width, 6.0));
        assert!(close(height, 57.5));
    }

    #[test]
    fn exclusion_precedes_size() {
        let v = validate_layout(&ManifestRequest::new(Category::Cards, "psa-pack-slabs", "9x1"))
            .unwrap();
        assert_eq!(
            v,
            Validity::Invalid {
                reason: Unmanufacturable::Excluded {
                    reason: "not offered for pack slabs"
                },
                width: None,
                height: None,
            }
        );
    }

    #[test]
    fn comics_use_rabbet_plus_face() {
        let v = validate_layout(&ManifestRequest::new(Category::Comics, "modern-age", "4-vertical"))
            .unwrap();
        assert_eq!(
            v,
            Validity::Invalid {
                reason: Unmanufacturable::ExceedsFrameLimit {
                    max: SizeIn::new(Inches(48.0), Inches(48.0))
                },
                width: Some(Inches(13.25)),
                height: Some(Inches(49.0)),
            }
        );
        let v = validate_layout(&ManifestRequest::new(Category::Comics, "modern-age", "3-vertical"))
            .unwrap();
        assert!(v.is_valid());
    }

    #[test]
    fn magazine_sheet_limit_is_orientation_free() {
        // 3 × 8.5 + 2 × 1.275 + 4 = 32.05 wide, too wide for the short side
        // but fine as the long side; 11 + 4 = 15 tall fits the short side
        let v = validate_layout(&ManifestRequest::new(
            Category::Magazines,
            "standard-letter",
            "3-horizontal",
        ))
        .unwrap();
        assert!(v.is_valid(), "{v:?}");

        let v = validate_layout(&ManifestRequest::new(
            Category::Magazines,
            "large-11x14",
            "30-grid-6x5",
        ))
        .unwrap();
        assert!(matches!(
            v,
            Validity::Invalid {
                reason: Unmanufacturable::ExceedsSheetLimit { .. },
                width: Some(_),
                height: Some(_),
            }
        ));
    }

    #[test]
    fn unlimited_categories_report_the_frame() {
        let v = validate_layout(&ManifestRequest::new(Category::Records, "lp", "cover-only"))
            .unwrap();
        assert_eq!(
            v,
            Validity::Valid {
                width: Inches(18.25),
                height: Inches(18.25)
            }
        );
    }

    #[test]
    fn playbills_screen_the_computed_frame() {
        let request = ManifestRequest::new(Category::Playbills, "playbill", "playbill-12-3x4");
        let Validity::Valid { width, height } = validate_layout(&request).unwrap() else {
            panic!("3x4 playbills should fit");
        };
        assert!(close(Some(width), 23.5));
        assert!(close(Some(height), 41.5));

        // plaque extension counted once
        let Validity::Valid { height, .. } =
            validate_layout(&request.with_plaque(true)).unwrap()
        else {
            panic!("3x4 playbills with plaque should fit");
        };
        assert!(close(Some(height), 42.25));

        let v = validate_layout(&ManifestRequest::new(
            Category::Playbills,
            "playbill",
            "playbill-4v-ticket-4",
        ))
        .unwrap();
        let Validity::Invalid { reason, height, .. } = v else {
            panic!("four stacked playbills with tickets should not fit: {v:?}");
        };
        assert!(matches!(reason, Unmanufacturable::ExceedsFrameLimit { .. }));
        assert!(close(height, 51.5));
    }

    #[test]
    fn classic_jersey_rejects_plaque_by_exclusion() {
        let v = validate_layout(
            &ManifestRequest::new(Category::Jerseys, "jersey", "classic-large").with_plaque(true),
        )
        .unwrap();
        assert!(matches!(
            v,
            Validity::Invalid {
                reason: Unmanufacturable::Excluded { .. },
                ..
            }
        ));
    }

    #[test]
    fn unknown_layout_is_a_hard_error() {
        let err =
            validate_layout(&ManifestRequest::new(Category::Comics, "modern-age", "9-grid"))
                .unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }
}
