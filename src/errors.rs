//! Error types with miette diagnostics.
//!
//! Only two things are errors here: asking the catalog for something it does
//! not have, and handing the engine malformed numbers. A layout that is too
//! big to build is a [`Validity::Invalid`](crate::validate::Validity) value,
//! and shapes that fail to intersect make the path builder fall back to
//! separate contours.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::catalog::{Category, Composition};
use crate::types::NumericError;

// ============================================================================
// Catalog Errors
// ============================================================================

/// What kind of catalog entry a lookup was after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Format,
    Layout,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Format => f.write_str("format"),
            LookupKind::Layout => f.write_str("layout"),
        }
    }
}

/// Unknown format or layout id
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{id}` for {category}")]
#[diagnostic(code(matcut::catalog::not_found))]
pub struct NotFoundError {
    pub kind: LookupKind,
    pub category: Category,
    pub id: String,
    #[help]
    pub known: Option<String>,
}

impl NotFoundError {
    pub(crate) fn new<'a>(
        kind: LookupKind,
        category: Category,
        id: &str,
        known: impl Iterator<Item = &'a str>,
    ) -> Self {
        let known: Vec<&str> = known.collect();
        let known = (!known.is_empty() && known.len() <= 12)
            .then(|| format!("known ids: {}", known.join(", ")));
        NotFoundError {
            kind,
            category,
            id: id.to_owned(),
            known,
        }
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

/// Malformed geometric input, raised before any geometry is produced
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is not usable: {error}")]
    #[diagnostic(code(matcut::validate::numeric))]
    Numeric {
        field: &'static str,
        #[source]
        error: NumericError,
    },

    #[error("{field} must be greater than zero, got {value}")]
    #[diagnostic(code(matcut::validate::non_positive))]
    NonPositive { field: &'static str, value: f64 },

    #[error("grid needs at least one row and one column, got {rows}x{columns}")]
    #[diagnostic(code(matcut::validate::empty_grid))]
    EmptyGrid { rows: u32, columns: u32 },

    #[error("grid of {rows}x{columns} cannot hold {count} openings")]
    #[diagnostic(
        code(matcut::validate::count_mismatch),
        help("the opening count must equal rows × columns")
    )]
    CountMismatch { count: u32, rows: u32, columns: u32 },

    #[error("Mat reveal must be less than mat border")]
    #[diagnostic(code(matcut::validate::reveal_not_less_than_border))]
    RevealNotLessThanBorder { reveal: f64, border: f64 },

    #[error("Mat border must be at least {minimum} inches")]
    #[diagnostic(code(matcut::validate::border_below_minimum))]
    BorderBelowMinimum { border: f64, minimum: f64 },

    #[error("Mat reveal cannot be negative")]
    #[diagnostic(code(matcut::validate::negative_reveal))]
    NegativeReveal { reveal: f64 },

    #[error("layout `{layout}` does not offer a brass plaque")]
    #[diagnostic(code(matcut::validate::plaque_not_offered))]
    PlaqueNotOffered { layout: String },

    #[error("{composition:?} composition needs a different set of cutouts, got {rects} rectangle(s) and {circles} circle(s)")]
    #[diagnostic(code(matcut::validate::composition_mismatch))]
    CompositionMismatch {
        composition: Composition,
        rects: usize,
        circles: usize,
    },
}

impl ValidationError {
    pub(crate) fn numeric(field: &'static str) -> impl FnOnce(NumericError) -> Self {
        move |error| ValidationError::Numeric { field, error }
    }
}

// ============================================================================
// Umbrella
// ============================================================================

/// Anything the engine can refuse to do
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_short_id_sets() {
        let err = NotFoundError::new(
            LookupKind::Layout,
            Category::Records,
            "triple",
            ["cover-only", "single-with-cover"].into_iter(),
        );
        assert_eq!(err.to_string(), "unknown layout `triple` for records");
        assert_eq!(
            err.known.as_deref(),
            Some("known ids: cover-only, single-with-cover")
        );
    }

    #[test]
    fn not_found_skips_long_id_lists() {
        let ids: Vec<String> = (0..40).map(|i| format!("id-{i}")).collect();
        let err = NotFoundError::new(
            LookupKind::Format,
            Category::Cards,
            "nope",
            ids.iter().map(String::as_str),
        );
        assert_eq!(err.known, None);
    }

    #[test]
    fn numeric_helper_wraps_field_name() {
        let err = ValidationError::numeric("mat border")(NumericError::NaN);
        assert_eq!(err.to_string(), "mat border is not usable: value is NaN");
    }

    #[test]
    fn engine_error_is_transparent() {
        let err: EngineError = ValidationError::NegativeReveal { reveal: -1.0 }.into();
        assert_eq!(err.to_string(), "Mat reveal cannot be negative");
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("matcut::validate::negative_reveal")
        );
    }
}
