//! Opening shapes.
//!
//! Every cutout is a rectangle or a circle. Shape-generic operations go through
//! the [`Shape`] trait, dispatched statically over [`Cutout`].

use enum_dispatch::enum_dispatch;

use crate::errors::ValidationError;
use crate::geometry::Circle;
use crate::path::{Contour, ContourBuilder};
use crate::types::{Length as Inches, PercentRect, PtIn, Rect, RectIn, Size};

/// Behaviour shared by all cutout shapes
#[enum_dispatch]
pub trait Shape {
    /// Axis-aligned bounds in mat space
    fn bounds(&self) -> RectIn;

    /// Reject zero or negative extents
    fn validate(&self) -> Result<(), ValidationError>;

    /// The same cutout with every edge pulled in by `by`.
    ///
    /// Rectangles lose `by` on each side; circles lose `by` of radius.
    fn inset(&self, by: Inches) -> Cutout;

    /// Closed clockwise contour tracing the cutout edge
    fn contour(&self) -> Contour<Inches>;

    /// Bounds as a percentage of the mat interior
    fn percent(&self, interior: Size<Inches>) -> Option<PercentRect> {
        PercentRect::from_rect(&self.bounds(), interior)
    }
}

/// A rectangular opening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectCutout {
    pub rect: RectIn,
}

impl RectCutout {
    pub const fn new(x: Inches, y: Inches, w: Inches, h: Inches) -> Self {
        RectCutout {
            rect: Rect::new(x, y, w, h),
        }
    }
}

impl Shape for RectCutout {
    fn bounds(&self) -> RectIn {
        self.rect
    }

    fn validate(&self) -> Result<(), ValidationError> {
        positive("opening width", self.rect.size.w)?;
        positive("opening height", self.rect.size.h)
    }

    fn inset(&self, by: Inches) -> Cutout {
        Cutout::Rect(RectCutout {
            rect: self.rect.inset(by),
        })
    }

    fn contour(&self) -> Contour<Inches> {
        let r = &self.rect;
        let mut b = ContourBuilder::new(r.origin);
        b.line_to(r.top_right());
        b.line_to(r.bottom_right());
        b.line_to(r.bottom_left());
        b.close()
    }
}

/// A circular opening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCutout {
    pub circle: Circle,
}

impl CircleCutout {
    pub const fn new(center: PtIn, diameter: Inches) -> Self {
        CircleCutout {
            circle: Circle::from_diameter(center, diameter),
        }
    }
}

impl Shape for CircleCutout {
    fn bounds(&self) -> RectIn {
        let Circle { center, radius } = self.circle;
        Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        positive("opening diameter", self.circle.diameter())
    }

    fn inset(&self, by: Inches) -> Cutout {
        Cutout::Circle(CircleCutout {
            circle: Circle::new(self.circle.center, self.circle.radius - by),
        })
    }

    fn contour(&self) -> Contour<Inches> {
        // Two half-turn arcs; a single arc can't start and end on the same point.
        let c = &self.circle;
        let mut b = ContourBuilder::new(c.west());
        b.arc_to(c.radius, false, c.east());
        b.arc_to(c.radius, false, c.west());
        b.close()
    }
}

/// One cutout shape
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutout {
    Rect(RectCutout),
    Circle(CircleCutout),
}

impl Cutout {
    pub fn as_rect(&self) -> Option<&RectIn> {
        match self {
            Cutout::Rect(r) => Some(&r.rect),
            Cutout::Circle(_) => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Cutout::Circle(c) => Some(&c.circle),
            Cutout::Rect(_) => None,
        }
    }
}

/// What an opening is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    /// A grid cell holding one catalog item (card, comic, magazine)
    Item,
    AlbumCover,
    Record,
    CdInsert,
    Disc,
    JerseyDisplay,
    Photo,
    /// A plaque that sits in its own cut opening
    Plaque,
    Invitation,
    /// The photo or RSVP card beside an invitation
    Companion,
    Playbill,
    /// Ticket stub under a playbill
    Ticket,
}

/// A cutout plus what it shows and how it stacks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opening {
    pub cutout: Cutout,
    pub purpose: Purpose,
    /// Higher draws on top where openings overlap
    pub z_index: Option<u8>,
}

impl Opening {
    pub const fn rect(rect: RectCutout, purpose: Purpose) -> Self {
        Opening {
            cutout: Cutout::Rect(rect),
            purpose,
            z_index: None,
        }
    }

    pub const fn circle(circle: CircleCutout, purpose: Purpose) -> Self {
        Opening {
            cutout: Cutout::Circle(circle),
            purpose,
            z_index: None,
        }
    }

    pub const fn with_z(mut self, z: u8) -> Self {
        self.z_index = Some(z);
        self
    }
}

fn positive(field: &'static str, value: Inches) -> Result<(), ValidationError> {
    if value.is_finite() && value.raw() > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositive {
            field,
            value: value.raw(),
        })
    }
}
