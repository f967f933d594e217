//! Opening geometry and compound mat paths for multi-opening picture frames.
//!
//! The crate is organized into modules:
//! - `catalog`: product categories, item formats and named layouts
//! - `grid`: evenly spaced openings for grid layouts
//! - `geometry`: circle/line and circle/circle intersections
//! - `cutout`, `path`: opening shapes and the contour stitcher that merges
//!   them into one compound mat outline
//! - `manifest`: the full geometry of one frame, ready for a cutter or renderer
//! - `fit`, `validate`, `pricing`: preview scaling, manufacturability, prices
//!
//! All geometry is in inches with y growing downward from the top-left corner
//! of the mat interior.
//!
//! ```
//! use matcut::{Category, ManifestRequest, build_manifest};
//!
//! let manifest = build_manifest(&ManifestRequest::new(Category::Cards, "psa", "2x3"))?;
//! assert_eq!(manifest.openings.len(), 6);
//! # Ok::<(), matcut::EngineError>(())
//! ```

pub mod catalog;
pub mod cutout;
pub mod defaults;
pub mod errors;
pub mod fit;
pub mod geometry;
pub mod grid;
pub mod log;
pub mod manifest;
pub mod path;
pub mod pricing;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use catalog::{
    Category, Format, Layout, LayoutFilter, LayoutGroup, list_layouts, lookup_format,
    lookup_layout,
};
pub use cutout::{Cutout, Opening, Purpose};
pub use errors::{EngineError, NotFoundError, ValidationError};
pub use fit::{PreviewScale, Viewport, scale_to_fit};
pub use grid::{GridOpenings, GridSpec, compute_grid};
pub use manifest::{
    DoubleMat, Manifest, ManifestRequest, MatOptions, ResolvedOpening, build_manifest,
    double_mat_paths,
};
pub use path::{CompoundPath, FillRule, mat_path};
pub use pricing::{PriceOptions, PriceTier, SizeTier, price};
pub use types::{Length, Px, Scaler};
pub use validate::{Unmanufacturable, Validity, validate_border_reveal, validate_layout};
