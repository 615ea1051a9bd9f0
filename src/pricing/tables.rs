//! Price lookup tables.
//!
//! Every table is a total mapping: unknown codes take an explicit fallback
//! (the `other` base, the `standard` 1.0 multiplier, or a 0 additive) so an
//! unrecognized code degrades to a neutral value instead of failing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Base price in yen per product type, referenced to a quantity of 100.
pub fn base_product_price(product_type: &str) -> Decimal {
    match product_type {
        "business-card" => dec!(2000),
        "flyer" => dec!(5000),
        "brochure" => dec!(10000),
        "poster" => dec!(8000),
        "booklet" => dec!(15000),
        "postcard" => dec!(3000),
        "stationery" => dec!(4000),
        _ => dec!(10000), // "other"
    }
}

/// Paper type price multiplier; `standard` paper is the 1.0 baseline.
pub fn paper_multiplier(paper_type: &str) -> Decimal {
    match paper_type {
        "premium" => dec!(1.5),
        "recycled" => dec!(1.2),
        "glossy" => dec!(1.3),
        "matte" => dec!(1.2),
        "textured" => dec!(1.6),
        "eco-friendly" => dec!(1.3),
        "fsc-certified" => dec!(1.4),
        _ => dec!(1.0), // "standard"
    }
}

/// Additive price in yen for the chosen color option; monochrome is free.
pub fn color_modifier(print_colors: &str) -> Decimal {
    match print_colors {
        "full-color-one-side" => dec!(3000),
        "full-color-both-sides" => dec!(5000),
        "spot-color" => dec!(2000),
        "pantone" => dec!(4000),
        "vegetable-ink" => dec!(1500),
        _ => Decimal::ZERO, // "black-and-white"
    }
}

/// Additive price in yen per selected finish code.
pub fn finishing_price(finish: &str) -> Decimal {
    match finish {
        "folding" => dec!(1000),
        "binding" => dec!(3000),
        "lamination" => dec!(2000),
        "die-cutting" => dec!(5000),
        "embossing" => dec!(4000),
        "foil-stamping" => dec!(3500),
        "uv-coating" => dec!(2500),
        "eco-varnish" => dec!(1500),
        _ => Decimal::ZERO, // "none"
    }
}

/// Sum of finishing prices over all selected finishes.
pub fn finishing_total(finishing: &[String]) -> Decimal {
    finishing.iter().map(|f| finishing_price(f)).sum()
}

/// Base price in yen per binding method, referenced to a quantity of 10.
/// Independent of the product-type table; unknown methods are priced as
/// perfect binding, the form's default.
pub fn binding_base_price(binding_type: &str) -> Decimal {
    match binding_type {
        "staple" => dec!(1000),
        "saddle-stitch" => dec!(2000),
        "spiral" => dec!(2500),
        "hardcover" => dec!(8000),
        "case-bound" => dec!(10000),
        _ => dec!(3000), // "perfect"
    }
}

/// Delivery speed multiplier; `standard` shipping is the 1.0 baseline.
pub fn delivery_speed_multiplier(delivery_speed: &str) -> Decimal {
    match delivery_speed {
        "express" => dec!(1.8),
        "same-day" => dec!(2.5),
        "international" => dec!(3.0),
        _ => dec!(1.0), // "standard"
    }
}

/// Additive price in yen per environmental certification.
pub fn certification_price(certification: &str) -> Decimal {
    match certification {
        "fsc" => dec!(2000),
        "pefc" => dec!(2000),
        "carbon-neutral" => dec!(5000),
        "rainforest-alliance" => dec!(3000),
        "nordic-swan" => dec!(3000),
        _ => Decimal::ZERO,
    }
}

/// Quantity discount schedule, strictly increasing in both threshold and
/// rate. The lowest tier carries a zero rate on purpose: reaching it still
/// means "no discount".
pub const QUANTITY_DISCOUNTS: [(i64, Decimal); 6] = [
    (100, dec!(0)),
    (250, dec!(0.05)),
    (500, dec!(0.10)),
    (1000, dec!(0.15)),
    (2500, dec!(0.20)),
    (5000, dec!(0.25)),
];

/// Discount rate for a quantity: the rate of the highest threshold not
/// exceeding it, zero below the lowest threshold.
pub fn quantity_discount(quantity: i64) -> Decimal {
    let mut rate = Decimal::ZERO;
    for (threshold, tier_rate) in QUANTITY_DISCOUNTS {
        if quantity >= threshold {
            rate = tier_rate;
        } else {
            break;
        }
    }
    rate
}
