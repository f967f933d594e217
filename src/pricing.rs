//! Retail pricing.
//!
//! Pricing is lenient: an id the tables do not know gets the category's
//! fallback price instead of an error. Whether a layout can be built at all
//! is [`validate_layout`](crate::validate::validate_layout)'s call.

use std::fmt;
use std::ops::Add;

use crate::catalog::{self, Arrangement, Category};
use crate::types::SizeIn;

/// Money in US cents
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cents(pub u32);

impl Cents {
    pub const ZERO: Cents = Cents(0);
}

impl Add for Cents {
    type Output = Cents;
    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Glazing {
    #[default]
    Standard,
    NonGlare,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Hardware {
    #[default]
    Standard,
    Security,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PriceOptions {
    pub glazing: Glazing,
    pub hardware: Hardware,
    pub plaque: bool,
}

/// Itemized price; upcharges are zero when the option is not taken
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceTier {
    pub base: Cents,
    pub glass_upcharge: Cents,
    pub hardware_upcharge: Cents,
    pub nameplate: Cents,
}

impl PriceTier {
    pub fn total(&self) -> Cents {
        self.base + self.glass_upcharge + self.hardware_upcharge + self.nameplate
    }
}

pub const GLASS_UPCHARGE: Cents = Cents(800);
pub const HARDWARE_UPCHARGE: Cents = Cents(800);
pub const NAMEPLATE: Cents = Cents(1500);
/// Grid products carry a larger engraved plate
pub const GRID_NAMEPLATE: Cents = Cents(2900);

/// Grid and invitation frames: base plus a step per extra opening
const GRID_BASE: u32 = 12000;
const GRID_PER_OPENING: u32 = 1500;
/// Playbill frames are priced by moulding length
const PLAYBILL_PER_INCH: f64 = 200.0;

/// Size class of a finished frame, by outer area
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
    XLarge,
}

impl SizeTier {
    pub fn for_frame(frame: SizeIn) -> SizeTier {
        let area = frame.w.raw() * frame.h.raw();
        if area <= 250.0 {
            SizeTier::Small
        } else if area <= 450.0 {
            SizeTier::Medium
        } else if area <= 700.0 {
            SizeTier::Large
        } else {
            SizeTier::XLarge
        }
    }
}

static RECORD_PRICES: [(&str, Cents); 3] = [
    ("cover-only", Cents(18900)),
    ("single-with-cover", Cents(24900)),
    ("double-with-covers", Cents(32900)),
];

static CD_PRICES: [(&str, Cents); 3] = [
    ("cover-only", Cents(12900)),
    ("disc-with-cover", Cents(18900)),
    ("double-disc", Cents(22900)),
];

static JERSEY_PRICES: [(&str, Cents); 6] = [
    ("classic-small", Cents(12900)),
    ("classic-regular", Cents(14900)),
    ("classic-large", Cents(17900)),
    ("premium-small", Cents(19900)),
    ("premium-regular", Cents(22900)),
    ("premium-large", Cents(27900)),
];

fn table_price(table: &[(&str, Cents)], layout_id: &str) -> Cents {
    table
        .iter()
        .find(|(id, _)| *id == layout_id)
        .or(table.first())
        .map_or(Cents(GRID_BASE), |(_, price)| *price)
}

/// Outer frame of a fixed layout at the category's default moulding; unknown
/// ids read as the first layout.
fn table_frame(category: Category, layout_id: &str) -> Option<SizeIn> {
    let layouts = category.layouts();
    let layout = layouts
        .iter()
        .find(|l| l.id == layout_id)
        .or(layouts.first())?;
    match &layout.arrangement {
        Arrangement::Explicit(rule) => Some(rule.interior.outset(category.profile().molding)),
        _ => None,
    }
}

/// Outer frame and size tier of a fixed layout, `None` for computed layouts
pub fn size_tier(category: Category, layout_id: &str) -> Option<(SizeIn, SizeTier)> {
    table_frame(category, layout_id).map(|frame| (frame, SizeTier::for_frame(frame)))
}

fn perimeter_price(category: Category, layout_id: &str) -> Cents {
    table_frame(category, layout_id).map_or(Cents(GRID_BASE), |frame| {
        let perimeter = 2.0 * (frame.w + frame.h).raw();
        Cents((perimeter * PLAYBILL_PER_INCH).round() as u32)
    })
}

/// Base price of a layout before options
pub fn base_price(category: Category, layout_id: &str) -> Cents {
    match category {
        Category::Records => table_price(&RECORD_PRICES, layout_id),
        Category::Cds => table_price(&CD_PRICES, layout_id),
        Category::Jerseys => table_price(&JERSEY_PRICES, layout_id),
        Category::Playbills => perimeter_price(category, layout_id),
        Category::Cards | Category::Comics | Category::Magazines | Category::Wedding => {
            let extra = catalog::lookup_layout(category, layout_id).map_or(0, |layout| {
                u32::try_from(layout.opening_count().saturating_sub(1)).unwrap_or(u32::MAX)
            });
            Cents(GRID_BASE.saturating_add(GRID_PER_OPENING.saturating_mul(extra)))
        }
    }
}

pub fn price(category: Category, layout_id: &str, options: &PriceOptions) -> PriceTier {
    let nameplate = match category {
        Category::Cards | Category::Comics | Category::Magazines | Category::Playbills => {
            GRID_NAMEPLATE
        }
        Category::Records | Category::Cds | Category::Jerseys | Category::Wedding => NAMEPLATE,
    };
    let tier = PriceTier {
        base: base_price(category, layout_id),
        glass_upcharge: match options.glazing {
            Glazing::Standard => Cents::ZERO,
            Glazing::NonGlare => GLASS_UPCHARGE,
        },
        hardware_upcharge: match options.hardware {
            Hardware::Standard => Cents::ZERO,
            Hardware::Security => HARDWARE_UPCHARGE,
        },
        nameplate: if options.plaque { nameplate } else { Cents::ZERO },
    };
    crate::log::debug!(%category, layout = layout_id, total = %tier.total(), "priced");
    tier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tables() {
        assert_eq!(base_price(Category::Records, "double-with-covers"), Cents(32900));
        assert_eq!(base_price(Category::Cds, "disc-with-cover"), Cents(18900));
        assert_eq!(base_price(Category::Jerseys, "premium-large"), Cents(27900));
    }

    #[test]
    fn unknown_ids_fall_back() {
        assert_eq!(base_price(Category::Records, "triple"), Cents(18900));
        assert_eq!(base_price(Category::Cds, ""), Cents(12900));
        assert_eq!(base_price(Category::Jerseys, "hockey"), Cents(12900));
        assert_eq!(base_price(Category::Cards, "10x10"), Cents(12000));
    }

    #[test]
    fn grid_prices_step_per_opening() {
        assert_eq!(base_price(Category::Cards, "1x1"), Cents(12000));
        assert_eq!(base_price(Category::Cards, "2x3"), Cents(19500));
        assert_eq!(base_price(Category::Magazines, "30-grid-6x5"), Cents(55500));
        assert_eq!(base_price(Category::Wedding, "invite-rsvp"), Cents(13500));
    }

    #[test]
    fn playbills_price_by_moulding_length() {
        // 11.5 × 14.5 frame, 52" of moulding
        assert_eq!(base_price(Category::Playbills, "playbill-single"), Cents(10400));
        // 17.5 × 17.0
        assert_eq!(base_price(Category::Playbills, "playbill-2-ticket-2"), Cents(13800));
        assert_eq!(
            base_price(Category::Playbills, "playbill-99"),
            base_price(Category::Playbills, "playbill-single")
        );
        let tier = price(Category::Playbills, "playbill-2h", &PriceOptions {
            plaque: true,
            ..PriceOptions::default()
        });
        assert_eq!(tier.nameplate, GRID_NAMEPLATE);
    }

    #[test]
    fn size_tiers_follow_frame_area() {
        let tier = |id| size_tier(Category::Playbills, id).map(|(_, t)| t);
        assert_eq!(tier("playbill-single"), Some(SizeTier::Small));
        assert_eq!(tier("playbill-2h"), Some(SizeTier::Medium));
        assert_eq!(tier("playbill-6-3x2"), Some(SizeTier::Large));
        assert_eq!(tier("playbill-12-3x4"), Some(SizeTier::XLarge));
        assert_eq!(size_tier(Category::Cards, "2x3"), None);
    }

    #[test]
    fn options_are_itemized() {
        let options = PriceOptions {
            glazing: Glazing::NonGlare,
            hardware: Hardware::Security,
            plaque: true,
        };
        let tier = price(Category::Comics, "4-quad", &options);
        assert_eq!(
            tier,
            PriceTier {
                base: Cents(16500),
                glass_upcharge: Cents(800),
                hardware_upcharge: Cents(800),
                nameplate: Cents(2900),
            }
        );
        assert_eq!(tier.total(), Cents(21000));

        let tier = price(Category::Records, "cover-only", &options);
        assert_eq!(tier.nameplate, NAMEPLATE);
        assert_eq!(tier.total(), Cents(18900 + 800 + 800 + 1500));
    }

    #[test]
    fn defaults_add_nothing() {
        let tier = price(Category::Cds, "double-disc", &PriceOptions::default());
        assert_eq!(tier.total(), Cents(22900));
        assert_eq!(tier.total().to_string(), "$229.00");
    }
}
