//! Compound mat paths.
//!
//! A mat is one [`CompoundPath`]: the outer board edge plus one hole contour
//! per opening, filled even-odd. Rectangles that touch circles (a sleeve next
//! to its disc) are merged into a single hole by [`stitch`], which walks the
//! rectangle and then chains arcs around each circle using the intersection
//! solvers in [`crate::geometry`].
//!
//! Segments are plain data with explicit endpoints, radii and flags. The
//! `Display` impls print the familiar `M x,y L x,y A r,r 0 l,s x,y Z` text,
//! which is handy for snapshots and for anyone feeding an SVG `d` attribute.

use std::f64::consts::PI;
use std::fmt;

use crate::catalog::Composition;
use crate::cutout::{Cutout, Shape};
use crate::errors::ValidationError;
use crate::geometry::{Circle, circle_circle, circle_vertical_line, clockwise_sweep};
use crate::types::{Coord, Length as Inches, Point, Px, PtIn, RectIn, Scaler, Size};

/// One drawing instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment<T> {
    MoveTo(Point<T>),
    LineTo(Point<T>),
    /// Circular arc from the current point to `to`
    ArcTo {
        radius: T,
        /// Arc spans more than half a turn
        large_arc: bool,
        /// Clockwise on screen (y-down)
        sweep: bool,
        to: Point<T>,
    },
    Close,
}

impl<T: Coord> Segment<T> {
    fn map<U>(&self, f: impl Fn(T) -> U) -> Segment<U> {
        let pt = |p: &Point<T>| Point::new(f(p.x), f(p.y));
        match self {
            Segment::MoveTo(p) => Segment::MoveTo(pt(p)),
            Segment::LineTo(p) => Segment::LineTo(pt(p)),
            Segment::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => Segment::ArcTo {
                radius: f(*radius),
                large_arc: *large_arc,
                sweep: *sweep,
                to: pt(to),
            },
            Segment::Close => Segment::Close,
        }
    }
}

/// A closed run of segments, starting with a `MoveTo` and ending with `Close`
#[derive(Debug, Clone, PartialEq)]
pub struct Contour<T> {
    pub segments: Vec<Segment<T>>,
}

impl<T: Coord> Contour<T> {
    pub fn map<U>(&self, f: impl Fn(T) -> U + Copy) -> Contour<U> {
        Contour {
            segments: self.segments.iter().map(|s| s.map(f)).collect(),
        }
    }

    /// Number of arc segments
    pub fn arc_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::ArcTo { .. }))
            .count()
    }
}

/// Builder for one closed contour.
///
/// ```
/// use matcut::path::ContourBuilder;
/// use matcut::types::{Length, Point};
///
/// let mut b = ContourBuilder::new(Point::new(Length(0.0), Length(0.0)));
/// b.line_to(Point::new(Length(1.0), Length(0.0)));
/// b.line_to(Point::new(Length(1.0), Length(1.0)));
/// let contour = b.close();
/// assert_eq!(contour.segments.len(), 4);
/// ```
#[derive(Debug)]
pub struct ContourBuilder {
    segments: Vec<Segment<Inches>>,
    current: PtIn,
}

impl ContourBuilder {
    pub fn new(start: PtIn) -> Self {
        ContourBuilder {
            segments: vec![Segment::MoveTo(start)],
            current: start,
        }
    }

    pub fn current(&self) -> PtIn {
        self.current
    }

    pub fn line_to(&mut self, to: PtIn) {
        self.segments.push(Segment::LineTo(to));
        self.current = to;
    }

    /// Clockwise arc of radius `radius` to `to`
    pub fn arc_to(&mut self, radius: Inches, large_arc: bool, to: PtIn) {
        self.segments.push(Segment::ArcTo {
            radius,
            large_arc,
            sweep: true,
            to,
        });
        self.current = to;
    }

    /// Clockwise arc around `circle` to `to`, choosing the large-arc flag
    /// from the actual angle swept.
    pub fn arc_around(&mut self, circle: &Circle, to: PtIn) {
        let large = clockwise_sweep(circle.center, self.current, to) > PI;
        self.arc_to(circle.radius, large, to);
    }

    pub fn close(mut self) -> Contour<Inches> {
        self.segments.push(Segment::Close);
        Contour {
            segments: self.segments,
        }
    }
}

/// Fill rule for a compound path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    EvenOdd,
    NonZero,
}

/// A mat board: outer edge followed by hole contours
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundPath<T> {
    pub contours: Vec<Contour<T>>,
    pub fill_rule: FillRule,
}

impl<T: Coord> CompoundPath<T> {
    /// Path data text, same as `to_string()`
    pub fn to_path_data(&self) -> String {
        self.to_string()
    }

    /// Hole contours, i.e. everything after the outer edge
    pub fn holes(&self) -> &[Contour<T>] {
        self.contours.get(1..).unwrap_or(&[])
    }
}

impl CompoundPath<Inches> {
    pub fn to_px(&self, scaler: &Scaler) -> CompoundPath<Px> {
        CompoundPath {
            contours: self
                .contours
                .iter()
                .map(|c| c.map(|l| scaler.len(l)))
                .collect(),
            fill_rule: self.fill_rule,
        }
    }
}

// ============================================================================
// Path data text
// ============================================================================

/// Four decimals, trailing zeros dropped, never `-0`
fn num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

fn write_point<T: Coord>(f: &mut fmt::Formatter<'_>, p: &Point<T>) -> fmt::Result {
    write!(f, "{},{}", num(p.x.value()), num(p.y.value()))
}

impl<T: Coord> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::MoveTo(p) => {
                f.write_str("M ")?;
                write_point(f, p)
            }
            Segment::LineTo(p) => {
                f.write_str("L ")?;
                write_point(f, p)
            }
            Segment::ArcTo {
                radius,
                large_arc,
                sweep,
                to,
            } => {
                let r = num(radius.value());
                write!(f, "A {r},{r} 0 {},{} ", u8::from(*large_arc), u8::from(*sweep))?;
                write_point(f, to)
            }
            Segment::Close => f.write_str("Z"),
        }
    }
}

impl<T: Coord> fmt::Display for Contour<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

impl<T: Coord> fmt::Display for CompoundPath<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, contour) in self.contours.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{contour}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Stitching
// ============================================================================

/// Merge a rectangle and a row of circles into one outline.
///
/// `circles` must be ordered left to right, the first one crossing the
/// rectangle's right edge and each following one crossing its predecessor.
/// The outline runs top-left → top-right → down the right edge to the first
/// crossing, clockwise around the circle chain, back to the right edge, then
/// bottom-right → bottom-left.
///
/// Returns `None` when any pair fails to cross (touching counts as failing,
/// its arc would have zero length), when a crossing falls outside the
/// rectangle's right edge, or when `circles` is empty.
pub fn stitch(rect: &RectIn, circles: &[Circle]) -> Option<Contour<Inches>> {
    let (first, rest) = circles.split_first()?;
    let edge = circle_vertical_line(first, rect.right())?;
    if edge.is_tangent() || edge.top.y < rect.top() || edge.bottom.y > rect.bottom() {
        return None;
    }

    let mut b = ContourBuilder::new(rect.origin);
    b.line_to(rect.top_right());
    b.line_to(edge.top);
    chain(&mut b, first, rest, edge.bottom)?;
    b.line_to(rect.bottom_right());
    b.line_to(rect.bottom_left());
    Some(b.close())
}

/// Arc around `current` from the builder's position to `exit`, detouring
/// around every circle in `rest` on the way.
fn chain(b: &mut ContourBuilder, current: &Circle, rest: &[Circle], exit: PtIn) -> Option<()> {
    let Some((next, after)) = rest.split_first() else {
        b.arc_around(current, exit);
        return Some(());
    };

    let cut = circle_circle(current, next).filter(|c| !c.is_tangent())?;
    b.arc_around(current, cut.top);
    chain(b, next, after, cut.bottom)?;
    b.arc_around(current, exit);
    Some(())
}

/// Contour of the whole board, clockwise from the top-left corner
pub fn board_contour(size: Size<Inches>) -> Contour<Inches> {
    let mut b = ContourBuilder::new(PtIn::new(Inches::ZERO, Inches::ZERO));
    b.line_to(PtIn::new(size.w, Inches::ZERO));
    b.line_to(PtIn::new(size.w, size.h));
    b.line_to(PtIn::new(Inches::ZERO, size.h));
    b.close()
}

/// Build the mat path for a board of `size` with `cutouts` removed.
///
/// Malformed cutouts are rejected before anything is emitted. For merged
/// compositions the first rectangle absorbs the circles (sorted left to right);
/// if stitching fails the shapes come out as independent contours instead.
pub fn mat_path(
    size: Size<Inches>,
    cutouts: &[Cutout],
    composition: Composition,
) -> Result<CompoundPath<Inches>, ValidationError> {
    Inches::try_positive(size.w.raw()).map_err(ValidationError::numeric("mat width"))?;
    Inches::try_positive(size.h.raw()).map_err(ValidationError::numeric("mat height"))?;
    for cutout in cutouts {
        cutout.validate()?;
    }

    let mut contours = vec![board_contour(size)];

    let wanted_circles = match composition {
        Composition::Rectangles => 0,
        Composition::RectWithCircle => 1,
        Composition::RectWithTwoCircles => 2,
    };
    if wanted_circles == 0 {
        contours.extend(cutouts.iter().map(Shape::contour));
        return Ok(CompoundPath {
            contours,
            fill_rule: FillRule::EvenOdd,
        });
    }

    let rects: Vec<&RectIn> = cutouts.iter().filter_map(Cutout::as_rect).collect();
    let mut circles: Vec<Circle> = cutouts.iter().filter_map(Cutout::as_circle).copied().collect();
    if rects.is_empty() || circles.len() != wanted_circles {
        return Err(ValidationError::CompositionMismatch {
            composition,
            rects: rects.len(),
            circles: circles.len(),
        });
    }
    circles.sort_by(|a, b| a.center.x.raw().total_cmp(&b.center.x.raw()));

    let (host, others) = (rects[0], &rects[1..]);
    match stitch(host, &circles) {
        Some(merged) => contours.push(merged),
        None => {
            crate::log::debug!(
                circles = circles.len(),
                "shapes do not intersect, emitting separate contours"
            );
            contours.push(crate::cutout::RectCutout { rect: *host }.contour());
            contours.extend(
                circles
                    .iter()
                    .map(|c| crate::cutout::CircleCutout { circle: *c }.contour()),
            );
        }
    }
    contours.extend(
        others
            .iter()
            .map(|r| crate::cutout::RectCutout { rect: **r }.contour()),
    );

    Ok(CompoundPath {
        contours,
        fill_rule: FillRule::EvenOdd,
    })
}
