//! Scale-to-fit for previews.
//!
//! The engine never assumes a rendering coordinate system. A renderer asks for
//! the largest scale that fits a frame into its box and gets back a
//! [`PreviewScale`], whose [`Scaler`] converts inch geometry into pixels.

use crate::errors::ValidationError;
use crate::types::{Length as Inches, Px, Scalar, Scaler, SizeIn};

/// Bounding box a preview must fit inside, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Upper bound on the scale; `None` lets the box decide
    pub max_scale: Option<f64>,
    /// Subtracted from every side of the box before fitting
    pub padding: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport {
            width,
            height,
            max_scale: None,
            padding: 0.0,
        }
    }

    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewScale {
    /// Pixels per inch, as a unitless factor
    pub scale: Scalar,
    pub preview_width: Px,
    pub preview_height: Px,
    pub pixels_per_inch: f64,
}

impl PreviewScale {
    pub fn scaler(&self) -> Scaler {
        Scaler::new(self.pixels_per_inch)
    }
}

/// Largest scale that fits `frame` inside `viewport`.
///
/// The scale is the smaller of the two axis ratios, clamped by the
/// viewport's maximum, so neither scaled side ever exceeds the box.
pub fn scale_to_fit(frame: SizeIn, viewport: &Viewport) -> Result<PreviewScale, ValidationError> {
    let frame_w =
        Inches::try_positive(frame.w.raw()).map_err(ValidationError::numeric("frame width"))?;
    let frame_h =
        Inches::try_positive(frame.h.raw()).map_err(ValidationError::numeric("frame height"))?;
    let padding = Px::try_non_negative(viewport.padding)
        .map_err(ValidationError::numeric("viewport padding"))?
        .raw();

    let box_w = Px::try_new(viewport.width).map_err(ValidationError::numeric("viewport width"))?;
    let box_h = Px::try_new(viewport.height).map_err(ValidationError::numeric("viewport height"))?;
    let box_w = box_w.raw() - 2.0 * padding;
    let box_h = box_h.raw() - 2.0 * padding;
    if box_w <= 0.0 {
        return Err(ValidationError::NonPositive {
            field: "viewport width",
            value: box_w,
        });
    }
    if box_h <= 0.0 {
        return Err(ValidationError::NonPositive {
            field: "viewport height",
            value: box_h,
        });
    }

    let mut scale = (box_w / frame_w.raw()).min(box_h / frame_h.raw());
    if let Some(max) = viewport.max_scale {
        let max = Scaler::try_new(max).map_err(ValidationError::numeric("max scale"))?;
        scale = scale.min(max.px_per_inch);
    }

    Ok(PreviewScale {
        scale: Scalar(scale),
        preview_width: frame_w.to_px(scale),
        preview_height: frame_h.to_px(scale),
        pixels_per_inch: scale,
    })
}
