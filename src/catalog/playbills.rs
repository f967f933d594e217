//! Theatre playbills, alone or with their ticket stubs.
//!
//! Every layout is columns of playbills in one or more rows. Ticket layouts
//! put a stub row under each playbill row, one stub per playbill. All
//! openings share the same border and gap, so the tables only record the
//! shape of the arrangement and the openings are laid out from it.

use super::{
    Arrangement, Category, Composition, ExplicitRule, Format, Layout, LayoutGroup, PlaqueStyle,
    Profile, SizeLimit, rect, size,
};
use crate::cutout::{Opening, Purpose};
use crate::defaults::{GRID_NAMEPLATE_HEIGHT, GRID_NAMEPLATE_WIDTH, MAT_BORDER, MAT_REVEAL, MOLDING};
use crate::types::{Length as Inches, Size, SizeIn};

pub const PLAYBILL: SizeIn = size(5.5, 8.5);
pub const TICKET: SizeIn = size(5.5, 2.0);
/// Gap between neighbouring openings, across and down
pub const SPACING: f64 = 0.5;
pub const PLAQUE_EXTENSION: Inches = Inches::inches(0.75);
pub const MAX_FRAME: Inches = Inches::inches(48.0);

pub static FORMATS: [Format; 1] = [Format {
    id: "playbill",
    category: Category::Playbills,
    name: "Broadway playbill",
    size: PLAYBILL,
    depth: None,
    diameter: None,
    oversize: false,
}];

pub static PROFILE: Profile = Profile {
    border: MAT_BORDER,
    reveal: MAT_REVEAL,
    molding: MOLDING,
    plaque: PlaqueStyle::Extension {
        extension: PLAQUE_EXTENSION,
        plate: Size::new(GRID_NAMEPLATE_WIDTH, GRID_NAMEPLATE_HEIGHT),
    },
    limit: Some(SizeLimit::Frame {
        max: Size::new(MAX_FRAME, MAX_FRAME),
    }),
    outer_rounding: None,
};

/// Shape of a playbill arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rows {
    pub columns: usize,
    pub rows: usize,
    /// A ticket stub under every playbill
    pub tickets: bool,
}

impl Rows {
    const fn playbills(columns: usize, rows: usize) -> Self {
        Rows {
            columns,
            rows,
            tickets: false,
        }
    }

    const fn with_tickets(columns: usize, rows: usize) -> Self {
        Rows {
            columns,
            rows,
            tickets: true,
        }
    }

    const fn per_row(&self) -> usize {
        if self.tickets {
            self.columns * 2
        } else {
            self.columns
        }
    }

    pub const fn count(&self) -> usize {
        self.per_row() * self.rows
    }

    /// Top of one playbill row to the top of the next
    const fn pitch(&self) -> f64 {
        let mut pitch = PLAYBILL.h.0 + SPACING;
        if self.tickets {
            pitch += TICKET.h.0 + SPACING;
        }
        pitch
    }

    pub const fn interior(&self) -> SizeIn {
        let border = MAT_BORDER.0;
        let columns = self.columns as f64;
        size(
            2.0 * border + columns * PLAYBILL.w.0 + (columns - 1.0) * SPACING,
            2.0 * border + self.rows as f64 * self.pitch() - SPACING,
        )
    }

    const fn group(&self) -> LayoutGroup {
        match (self.columns, self.rows, self.tickets) {
            (1, 1, false) => LayoutGroup::Single,
            (1, _, _) => LayoutGroup::Stack,
            (_, 1, false) => LayoutGroup::Row,
            _ => LayoutGroup::Grid,
        }
    }

    /// Row by row: the playbills left to right, then their tickets.
    const fn openings<const N: usize>(&self) -> [Opening; N] {
        assert!(N == self.count());
        let per_row = self.per_row();
        let border = MAT_BORDER.0;

        let mut out = [Opening::rect(rect(0.0, 0.0, 0.0, 0.0), Purpose::Playbill); N];
        let mut i = 0;
        while i < N {
            let slot = i % per_row;
            let column = (slot % self.columns) as f64;
            let x = border + column * (PLAYBILL.w.0 + SPACING);
            let y = border + (i / per_row) as f64 * self.pitch();
            let opening = if slot < self.columns {
                Opening::rect(rect(x, y, PLAYBILL.w.0, PLAYBILL.h.0), Purpose::Playbill)
            } else {
                Opening::rect(
                    rect(x, y + PLAYBILL.h.0 + SPACING, TICKET.w.0, TICKET.h.0),
                    Purpose::Ticket,
                )
            };
            out[i] = opening.with_z(1);
            i += 1;
        }
        out
    }
}

const SINGLE: Rows = Rows::playbills(1, 1);
const TICKET_1: Rows = Rows::with_tickets(1, 1);
const H2: Rows = Rows::playbills(2, 1);
const V2: Rows = Rows::playbills(1, 2);
const V2_TICKET_2: Rows = Rows::with_tickets(1, 2);
const H3: Rows = Rows::playbills(3, 1);
const V3: Rows = Rows::playbills(1, 3);
const V3_TICKET_3: Rows = Rows::with_tickets(1, 3);
const QUAD: Rows = Rows::playbills(2, 2);
const H4: Rows = Rows::playbills(4, 1);
const H4_TICKET_4: Rows = Rows::with_tickets(4, 1);
const V4: Rows = Rows::playbills(1, 4);
const V4_TICKET_4: Rows = Rows::with_tickets(1, 4);
const H5: Rows = Rows::playbills(5, 1);
const H5_TICKET_5: Rows = Rows::with_tickets(5, 1);
const H6: Rows = Rows::playbills(6, 1);
const H6_TICKET_6: Rows = Rows::with_tickets(6, 1);
const PAIR_TICKET_2: Rows = Rows::with_tickets(2, 1);
const TRIO_TICKET_3: Rows = Rows::with_tickets(3, 1);
const QUAD_TICKET_4: Rows = Rows::with_tickets(2, 2);
const G2X3: Rows = Rows::playbills(2, 3);
const G2X3_TICKET_6: Rows = Rows::with_tickets(2, 3);
const G3X2: Rows = Rows::playbills(3, 2);
const G3X2_TICKET_6: Rows = Rows::with_tickets(3, 2);
const G2X4: Rows = Rows::playbills(2, 4);
const G2X4_TICKET_8: Rows = Rows::with_tickets(2, 4);
const G4X2: Rows = Rows::playbills(4, 2);
const G4X2_TICKET_8: Rows = Rows::with_tickets(4, 2);
const G3X3: Rows = Rows::playbills(3, 3);
const G3X3_TICKET_9: Rows = Rows::with_tickets(3, 3);
const G3X4: Rows = Rows::playbills(3, 4);

static SINGLE_OPENINGS: [Opening; SINGLE.count()] = SINGLE.openings();
static TICKET_1_OPENINGS: [Opening; TICKET_1.count()] = TICKET_1.openings();
static H2_OPENINGS: [Opening; H2.count()] = H2.openings();
static V2_OPENINGS: [Opening; V2.count()] = V2.openings();
static V2_TICKET_2_OPENINGS: [Opening; V2_TICKET_2.count()] = V2_TICKET_2.openings();
static H3_OPENINGS: [Opening; H3.count()] = H3.openings();
static V3_OPENINGS: [Opening; V3.count()] = V3.openings();
static V3_TICKET_3_OPENINGS: [Opening; V3_TICKET_3.count()] = V3_TICKET_3.openings();
static QUAD_OPENINGS: [Opening; QUAD.count()] = QUAD.openings();
static H4_OPENINGS: [Opening; H4.count()] = H4.openings();
static H4_TICKET_4_OPENINGS: [Opening; H4_TICKET_4.count()] = H4_TICKET_4.openings();
static V4_OPENINGS: [Opening; V4.count()] = V4.openings();
static V4_TICKET_4_OPENINGS: [Opening; V4_TICKET_4.count()] = V4_TICKET_4.openings();
static H5_OPENINGS: [Opening; H5.count()] = H5.openings();
static H5_TICKET_5_OPENINGS: [Opening; H5_TICKET_5.count()] = H5_TICKET_5.openings();
static H6_OPENINGS: [Opening; H6.count()] = H6.openings();
static H6_TICKET_6_OPENINGS: [Opening; H6_TICKET_6.count()] = H6_TICKET_6.openings();
static PAIR_TICKET_2_OPENINGS: [Opening; PAIR_TICKET_2.count()] = PAIR_TICKET_2.openings();
static TRIO_TICKET_3_OPENINGS: [Opening; TRIO_TICKET_3.count()] = TRIO_TICKET_3.openings();
static QUAD_TICKET_4_OPENINGS: [Opening; QUAD_TICKET_4.count()] = QUAD_TICKET_4.openings();
static G2X3_OPENINGS: [Opening; G2X3.count()] = G2X3.openings();
static G2X3_TICKET_6_OPENINGS: [Opening; G2X3_TICKET_6.count()] = G2X3_TICKET_6.openings();
static G3X2_OPENINGS: [Opening; G3X2.count()] = G3X2.openings();
static G3X2_TICKET_6_OPENINGS: [Opening; G3X2_TICKET_6.count()] = G3X2_TICKET_6.openings();
static G2X4_OPENINGS: [Opening; G2X4.count()] = G2X4.openings();
static G2X4_TICKET_8_OPENINGS: [Opening; G2X4_TICKET_8.count()] = G2X4_TICKET_8.openings();
static G4X2_OPENINGS: [Opening; G4X2.count()] = G4X2.openings();
static G4X2_TICKET_8_OPENINGS: [Opening; G4X2_TICKET_8.count()] = G4X2_TICKET_8.openings();
static G3X3_OPENINGS: [Opening; G3X3.count()] = G3X3.openings();
static G3X3_TICKET_9_OPENINGS: [Opening; G3X3_TICKET_9.count()] = G3X3_TICKET_9.openings();
static G3X4_OPENINGS: [Opening; G3X4.count()] = G3X4.openings();

pub static LAYOUTS: [Layout; 31] = [
    layout("playbill-single", &SINGLE, &SINGLE_OPENINGS),
    layout("playbill-ticket-1", &TICKET_1, &TICKET_1_OPENINGS),
    layout("playbill-2h", &H2, &H2_OPENINGS),
    layout("playbill-2v", &V2, &V2_OPENINGS),
    layout("playbill-2v-ticket-2", &V2_TICKET_2, &V2_TICKET_2_OPENINGS),
    layout("playbill-3h", &H3, &H3_OPENINGS),
    layout("playbill-3v", &V3, &V3_OPENINGS),
    layout("playbill-3v-ticket-3", &V3_TICKET_3, &V3_TICKET_3_OPENINGS),
    layout("playbill-4", &QUAD, &QUAD_OPENINGS),
    layout("playbill-4h", &H4, &H4_OPENINGS),
    layout("playbill-4h-ticket-4", &H4_TICKET_4, &H4_TICKET_4_OPENINGS),
    layout("playbill-4v", &V4, &V4_OPENINGS),
    layout("playbill-4v-ticket-4", &V4_TICKET_4, &V4_TICKET_4_OPENINGS),
    layout("playbill-5h", &H5, &H5_OPENINGS),
    layout("playbill-5h-ticket-5", &H5_TICKET_5, &H5_TICKET_5_OPENINGS),
    layout("playbill-6h", &H6, &H6_OPENINGS),
    layout("playbill-6h-ticket-6", &H6_TICKET_6, &H6_TICKET_6_OPENINGS),
    layout("playbill-2-ticket-2", &PAIR_TICKET_2, &PAIR_TICKET_2_OPENINGS),
    layout("playbill-3-ticket-3", &TRIO_TICKET_3, &TRIO_TICKET_3_OPENINGS),
    layout("playbill-4-ticket-4", &QUAD_TICKET_4, &QUAD_TICKET_4_OPENINGS),
    layout("playbill-6-2x3", &G2X3, &G2X3_OPENINGS),
    layout("playbill-6-2x3-ticket-6", &G2X3_TICKET_6, &G2X3_TICKET_6_OPENINGS),
    layout("playbill-6-3x2", &G3X2, &G3X2_OPENINGS),
    layout("playbill-6-3x2-ticket-6", &G3X2_TICKET_6, &G3X2_TICKET_6_OPENINGS),
    layout("playbill-8-2x4", &G2X4, &G2X4_OPENINGS),
    layout("playbill-8-2x4-ticket-8", &G2X4_TICKET_8, &G2X4_TICKET_8_OPENINGS),
    layout("playbill-8-4x2", &G4X2, &G4X2_OPENINGS),
    layout("playbill-8-4x2-ticket-8", &G4X2_TICKET_8, &G4X2_TICKET_8_OPENINGS),
    layout("playbill-9-3x3", &G3X3, &G3X3_OPENINGS),
    layout("playbill-9-3x3-ticket-9", &G3X3_TICKET_9, &G3X3_TICKET_9_OPENINGS),
    layout("playbill-12-3x4", &G3X4, &G3X4_OPENINGS),
];

const fn layout(id: &'static str, shape: &Rows, openings: &'static [Opening]) -> Layout {
    Layout {
        id,
        category: Category::Playbills,
        group: shape.group(),
        arrangement: Arrangement::Explicit(ExplicitRule::new(
            shape.interior(),
            MAT_BORDER,
            Composition::Rectangles,
            openings,
        )),
    }
}
