//! Closed-form intersection solvers for stitching circles into rectangles.
//!
//! Coordinates are y-down (mat interior, top-left origin). Both solvers return
//! `None` when the shapes do not cross; callers treat that as "draw the shapes
//! separately", never as an error.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::types::{Length as Inches, PtIn};

/// A circle in mat space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: PtIn,
    pub radius: Inches,
}

impl Circle {
    pub const fn new(center: PtIn, radius: Inches) -> Self {
        Circle { center, radius }
    }

    pub const fn from_diameter(center: PtIn, diameter: Inches) -> Self {
        Circle {
            center,
            radius: Inches::inches(diameter.0 / 2.0),
        }
    }

    pub fn diameter(&self) -> Inches {
        self.radius * 2.0
    }

    /// Leftmost point on the circle
    pub fn west(&self) -> PtIn {
        PtIn::new(self.center.x - self.radius, self.center.y)
    }

    /// Rightmost point on the circle
    pub fn east(&self) -> PtIn {
        PtIn::new(self.center.x + self.radius, self.center.y)
    }
}

/// The two ends of an intersection chord, labelled by height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordPoints {
    /// Point with the smaller y
    pub top: PtIn,
    /// Point with the larger y
    pub bottom: PtIn,
}

impl ChordPoints {
    /// Both ends coincide within tolerance: the shapes only touch.
    pub fn is_tangent(&self) -> bool {
        self.top.approx_eq(self.bottom)
    }

    /// Label two points: smaller y is `top`, ties go to the smaller x.
    fn label(a: DVec2, b: DVec2) -> Self {
        let a_first = a.y < b.y || (a.y == b.y && a.x <= b.x);
        let (top, bottom) = if a_first { (a, b) } else { (b, a) };
        ChordPoints {
            top: PtIn::from_dvec2(top),
            bottom: PtIn::from_dvec2(bottom),
        }
    }
}

/// Intersect a circle with the vertical line `x = line_x`.
///
/// Returns `None` when `|line_x - cx| > r`. A tangent line yields a chord whose
/// `top` and `bottom` coincide.
pub fn circle_vertical_line(circle: &Circle, line_x: Inches) -> Option<ChordPoints> {
    let r = circle.radius.raw();
    let dx = line_x.raw() - circle.center.x.raw();
    if dx.abs() > r {
        return None;
    }

    let dy = (r * r - dx * dx).max(0.0).sqrt();
    let cy = circle.center.y.raw();
    Some(ChordPoints {
        top: PtIn::new(line_x, Inches(cy - dy)),
        bottom: PtIn::new(line_x, Inches(cy + dy)),
    })
}

/// Intersect two circles.
///
/// Returns `None` for disjoint circles (`d > r1 + r2`), nested circles
/// (`d < |r1 - r2|`) and concentric circles (`d == 0`). The `top`/`bottom`
/// labels do not depend on argument order.
pub fn circle_circle(a: &Circle, b: &Circle) -> Option<ChordPoints> {
    let c1 = a.center.to_dvec2();
    let c2 = b.center.to_dvec2();
    let (r1, r2) = (a.radius.raw(), b.radius.raw());

    let delta = c2 - c1;
    let d = delta.length();
    if d == 0.0 || d > r1 + r2 || d < (r1 - r2).abs() {
        return None;
    }

    // Distance from c1 to the chord midpoint, then half the chord length
    let along = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let half_chord = (r1 * r1 - along * along).max(0.0).sqrt();

    let unit = delta / d;
    let mid = c1 + unit * along;
    let normal = DVec2::new(unit.y, -unit.x) * half_chord;

    Some(ChordPoints::label(mid + normal, mid - normal))
}

/// Angle swept going clockwise on screen (y-down) from `from` to `to` around
/// `center`, in `[0, 2π)`.
pub fn clockwise_sweep(center: PtIn, from: PtIn, to: PtIn) -> f64 {
    let c = center.to_dvec2();
    let (u, v) = (from.to_dvec2() - c, to.to_dvec2() - c);
    (v.y.atan2(v.x) - u.y.atan2(u.x)).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(PtIn::new(Inches(x), Inches(y)), Inches(r))
    }

    fn pt(x: f64, y: f64) -> PtIn {
        PtIn::new(Inches(x), Inches(y))
    }

    // ==================== circle / vertical line ====================

    #[test]
    fn line_through_center_hits_poles() {
        let hit = circle_vertical_line(&circle(10.0, 10.0, 5.0), Inches(10.0)).unwrap();
        assert_eq!(hit.top, pt(10.0, 5.0));
        assert_eq!(hit.bottom, pt(10.0, 15.0));
    }

    #[test]
    fn line_outside_circle_misses() {
        assert_eq!(circle_vertical_line(&circle(10.0, 10.0, 5.0), Inches(20.0)), None);
        assert_eq!(circle_vertical_line(&circle(10.0, 10.0, 5.0), Inches(4.9)), None);
    }

    #[test]
    fn off_center_line_uses_pythagoras() {
        let hit = circle_vertical_line(&circle(11.0, 10.0, 5.0), Inches(8.0)).unwrap();
        assert!(hit.top.approx_eq(pt(8.0, 6.0)));
        assert!(hit.bottom.approx_eq(pt(8.0, 14.0)));
    }

    #[test]
    fn tangent_line_collapses_chord() {
        let hit = circle_vertical_line(&circle(0.0, 0.0, 2.0), Inches(2.0)).unwrap();
        assert_eq!(hit.top, hit.bottom);
        assert_eq!(hit.top, pt(2.0, 0.0));
        assert!(hit.is_tangent());
    }

    // ==================== circle / circle ====================

    #[test]
    fn equal_circles_meet_on_bisector() {
        let hit = circle_circle(&circle(0.0, 0.0, 5.0), &circle(8.0, 0.0, 5.0)).unwrap();
        assert!(hit.top.approx_eq(pt(4.0, -3.0)));
        assert!(hit.bottom.approx_eq(pt(4.0, 3.0)));
    }

    #[test]
    fn labels_do_not_depend_on_argument_order() {
        let a = circle(0.0, 0.0, 5.0);
        let b = circle(8.0, 0.0, 5.0);
        let ab = circle_circle(&a, &b).unwrap();
        let ba = circle_circle(&b, &a).unwrap();
        assert!(ab.top.approx_eq(ba.top));
        assert!(ab.bottom.approx_eq(ba.bottom));
    }

    #[test]
    fn concentric_circles_have_no_chord() {
        assert_eq!(circle_circle(&circle(0.0, 0.0, 5.0), &circle(0.0, 0.0, 3.0)), None);
        assert_eq!(circle_circle(&circle(1.0, 1.0, 5.0), &circle(1.0, 1.0, 5.0)), None);
    }

    #[test]
    fn disjoint_and_nested_circles_have_no_chord() {
        assert_eq!(circle_circle(&circle(0.0, 0.0, 2.0), &circle(10.0, 0.0, 2.0)), None);
        assert_eq!(circle_circle(&circle(0.0, 0.0, 5.0), &circle(1.0, 0.0, 1.0)), None);
    }

    #[test]
    fn externally_touching_circles_are_tangent() {
        let hit = circle_circle(&circle(11.0, 10.0, 5.0), &circle(21.0, 10.0, 5.0)).unwrap();
        assert!(hit.is_tangent());
        assert!(hit.top.approx_eq(pt(16.0, 10.0)));
        let crossing = circle_circle(&circle(0.0, 0.0, 5.0), &circle(8.0, 0.0, 5.0)).unwrap();
        assert!(!crossing.is_tangent());
    }

    #[test]
    fn vertically_stacked_circles_tie_break_on_x() {
        let hit = circle_circle(&circle(0.0, 0.0, 5.0), &circle(0.0, 8.0, 5.0)).unwrap();
        assert!(hit.top.approx_eq(pt(-3.0, 4.0)));
        assert!(hit.bottom.approx_eq(pt(3.0, 4.0)));
    }

    #[test]
    fn intersection_points_lie_on_both_circles() {
        let a = circle(17.25, 8.25, 5.85);
        let b = circle(27.25, 8.25, 5.85);
        let hit = circle_circle(&a, &b).unwrap();
        for p in [hit.top, hit.bottom] {
            let da = p.to_dvec2().distance(a.center.to_dvec2());
            let db = p.to_dvec2().distance(b.center.to_dvec2());
            assert!((da - 5.85).abs() < 1e-9);
            assert!((db - 5.85).abs() < 1e-9);
        }
    }

    // ==================== sweep ====================

    #[test]
    fn clockwise_sweep_goes_over_the_top() {
        let c = pt(0.0, 0.0);
        // West to east through north (y-down, so north is negative y)
        let sweep = clockwise_sweep(c, pt(-1.0, 0.0), pt(1.0, 0.0));
        assert!((sweep - PI).abs() < 1e-12);
        // North to east is a quarter turn clockwise
        let sweep = clockwise_sweep(c, pt(0.0, -1.0), pt(1.0, 0.0));
        assert!((sweep - PI / 2.0).abs() < 1e-12);
        // East to north is three quarters
        let sweep = clockwise_sweep(c, pt(1.0, 0.0), pt(0.0, -1.0));
        assert!((sweep - 1.5 * PI).abs() < 1e-12);
    }
}
