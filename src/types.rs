//! Strongly-typed numeric primitives for mat geometry.
//!
//! All catalog and layout math happens in inches ([`Length`]). Pixels ([`Px`])
//! only appear after a [`Scaler`] has been applied, and percentages
//! ([`Percent`]) are always relative to a mat interior.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::DVec2;

use crate::defaults::TOLERANCE;

/// Rejection reasons for user-supplied numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when a positive value is required
    Zero,
    /// Value is negative
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            NumericError::NaN => "NaN",
            NumericError::Infinite => "infinite",
            NumericError::Zero => "zero",
            NumericError::Negative => "negative",
        };
        write!(f, "value is {what}")
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

fn check_positive(val: f64) -> Result<f64, NumericError> {
    if check_non_negative(val)? == 0.0 {
        Err(NumericError::Zero)
    } else {
        Ok(val)
    }
}

/// Length in inches
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Const-friendly constructor for table data. Unchecked; use `try_new`
    /// for values that come from a caller.
    #[inline]
    pub(crate) const fn inches(val: f64) -> Length {
        Length(val)
    }

    /// Finite length, any sign
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        check_finite(val).map(Length)
    }

    /// Finite length that is zero or more
    pub fn try_non_negative(val: f64) -> Result<Length, NumericError> {
        check_non_negative(val).map(Length)
    }

    /// Finite length strictly greater than zero
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        check_positive(val).map(Length)
    }

    pub fn to_px(self, px_per_inch: f64) -> Px {
        Px(self.0 * px_per_inch)
    }

    #[inline]
    pub fn abs(self) -> Length {
        Length(self.0.abs())
    }

    #[inline]
    pub fn min(self, other: Length) -> Length {
        Length(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Length) -> Length {
        Length(self.0.max(other.0))
    }

    /// Raw inches (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Ratio of two lengths, `None` when the divisor is zero
    #[inline]
    pub fn checked_div(self, rhs: Length) -> Option<Scalar> {
        if rhs.0 == 0.0 {
            None
        } else {
            Some(Scalar(self.0 / rhs.0))
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Equal within [`TOLERANCE`]
    #[inline]
    pub fn approx_eq(self, other: Length) -> bool {
        (self.0 - other.0).abs() <= TOLERANCE
    }

    /// Round to the nearest multiple of `step` (half rounds away from zero).
    pub fn round_to(self, step: Length) -> Length {
        if step.0 <= 0.0 {
            return self;
        }
        Length((self.0 / step.0).round() * step.0)
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

// Length / Length goes through checked_div so a zero interior can't leak
// infinities into percentage math.

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Length {
    fn sub_assign(&mut self, rhs: Length) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\"", self.0)
    }
}

/// Pixels, after a [`Scaler`] has been applied
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Px(pub f64);

impl Px {
    /// Finite pixel value, any sign
    pub fn try_new(val: f64) -> Result<Px, NumericError> {
        check_finite(val).map(Px)
    }

    pub fn try_non_negative(val: f64) -> Result<Px, NumericError> {
        check_non_negative(val).map(Px)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Unitless ratio
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scalar(pub f64);

impl Scalar {
    pub const ZERO: Scalar = Scalar(0.0);
    pub const ONE: Scalar = Scalar(1.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Mul<Length> for Scalar {
    type Output = Length;
    fn mul(self, rhs: Length) -> Length {
        Length(self.0 * rhs.0)
    }
}

impl Mul<Scalar> for Length {
    type Output = Length;
    fn mul(self, rhs: Scalar) -> Length {
        Length(self.0 * rhs.0)
    }
}

/// Percentage of a mat interior dimension (0..=100 for anything on the mat)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Percent(pub f64);

impl Percent {
    /// `part` as a percentage of `whole`; `None` when `whole` is zero
    pub fn of(part: Length, whole: Length) -> Option<Percent> {
        part.checked_div(whole).map(|ratio| Percent(ratio.raw() * 100.0))
    }

    /// Back to inches against the same `whole`
    pub fn apply(self, whole: Length) -> Length {
        Length(whole.0 * self.0 / 100.0)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A unit that can appear as a path coordinate
pub trait Coord: Copy + fmt::Debug + PartialEq {
    fn value(self) -> f64;
}

impl Coord for Length {
    fn value(self) -> f64 {
        self.0
    }
}

impl Coord for Px {
    fn value(self) -> f64 {
        self.0
    }
}

/// Inches to pixels at a fixed density
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    pub px_per_inch: f64,
}

impl Scaler {
    /// Unchecked; only for densities the crate computed itself.
    pub(crate) fn new(px_per_inch: f64) -> Self {
        Scaler { px_per_inch }
    }

    /// Rejects NaN, infinite, zero and negative densities
    pub fn try_new(px_per_inch: f64) -> Result<Self, NumericError> {
        check_positive(px_per_inch).map(Scaler::new)
    }

    pub fn len(&self, l: Length) -> Px {
        l.to_px(self.px_per_inch)
    }

    #[inline]
    pub fn px(&self, l: Length) -> f64 {
        l.0 * self.px_per_inch
    }

    pub fn point(&self, p: Point<Length>) -> Point<Px> {
        Point {
            x: self.len(p.x),
            y: self.len(p.y),
        }
    }

    pub fn size(&self, s: Size<Length>) -> Size<Px> {
        Size {
            w: self.len(s.w),
            h: self.len(s.h),
        }
    }

    pub fn rect(&self, r: Rect<Length>) -> Rect<Px> {
        Rect {
            origin: self.point(r.origin),
            size: self.size(r.size),
        }
    }
}

/// Generic 2D point, y grows downward
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl Point<Length> {
    pub(crate) fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x.0, self.y.0)
    }

    pub(crate) fn from_dvec2(v: DVec2) -> Self {
        Point {
            x: Length(v.x),
            y: Length(v.y),
        }
    }

    pub fn approx_eq(self, other: Self) -> bool {
        self.x.approx_eq(other.x) && self.y.approx_eq(other.y)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub const fn new(w: T, h: T) -> Self {
        Size { w, h }
    }
}

impl Size<Length> {
    pub fn approx_eq(self, other: Self) -> bool {
        self.w.approx_eq(other.w) && self.h.approx_eq(other.h)
    }

    /// Grow every side by `by`
    pub fn outset(self, by: Length) -> Self {
        Size {
            w: self.w + by * 2.0,
            h: self.h + by * 2.0,
        }
    }

    pub fn short_side(self) -> Length {
        self.w.min(self.h)
    }

    pub fn long_side(self) -> Length {
        self.w.max(self.h)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect<T> {
    pub origin: Point<T>,
    pub size: Size<T>,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, w: T, h: T) -> Self {
        Rect {
            origin: Point { x, y },
            size: Size { w, h },
        }
    }
}

impl Rect<Length> {
    pub fn left(&self) -> Length {
        self.origin.x
    }

    pub fn top(&self) -> Length {
        self.origin.y
    }

    pub fn right(&self) -> Length {
        self.origin.x + self.size.w
    }

    pub fn bottom(&self) -> Length {
        self.origin.y + self.size.h
    }

    pub fn center(&self) -> Point<Length> {
        Point {
            x: self.origin.x + self.size.w / 2.0,
            y: self.origin.y + self.size.h / 2.0,
        }
    }

    pub fn top_right(&self) -> Point<Length> {
        Point::new(self.right(), self.top())
    }

    pub fn bottom_right(&self) -> Point<Length> {
        Point::new(self.right(), self.bottom())
    }

    pub fn bottom_left(&self) -> Point<Length> {
        Point::new(self.left(), self.bottom())
    }

    /// Shrink every side by `by` (negative grows)
    pub fn inset(&self, by: Length) -> Self {
        Rect {
            origin: Point::new(self.origin.x + by, self.origin.y + by),
            size: Size::new(self.size.w - by * 2.0, self.size.h - by * 2.0),
        }
    }

    /// True when `other` lies inside `self`, edges included (within tolerance)
    pub fn contains(&self, other: &Rect<Length>) -> bool {
        other.left().raw() >= self.left().raw() - TOLERANCE
            && other.top().raw() >= self.top().raw() - TOLERANCE
            && other.right().raw() <= self.right().raw() + TOLERANCE
            && other.bottom().raw() <= self.bottom().raw() + TOLERANCE
    }

    pub fn approx_eq(&self, other: &Rect<Length>) -> bool {
        self.origin.approx_eq(other.origin) && self.size.approx_eq(other.size)
    }
}

/// A rectangle in percent of a mat interior
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PercentRect {
    pub x: Percent,
    pub y: Percent,
    pub width: Percent,
    pub height: Percent,
}

impl PercentRect {
    /// `None` when the interior has a zero dimension
    pub fn from_rect(rect: &Rect<Length>, interior: Size<Length>) -> Option<Self> {
        Some(PercentRect {
            x: Percent::of(rect.origin.x, interior.w)?,
            y: Percent::of(rect.origin.y, interior.h)?,
            width: Percent::of(rect.size.w, interior.w)?,
            height: Percent::of(rect.size.h, interior.h)?,
        })
    }

    pub fn to_absolute(&self, interior: Size<Length>) -> Rect<Length> {
        Rect::new(
            self.x.apply(interior.w),
            self.y.apply(interior.h),
            self.width.apply(interior.w),
            self.height.apply(interior.h),
        )
    }
}

/// Convenient aliases
pub type PtIn = Point<Length>;
pub type PtPx = Point<Px>;
pub type RectIn = Rect<Length>;
pub type SizeIn = Size<Length>;
