//! Per-service price calculators and the turnaround estimator.
//!
//! Pure functions, no I/O. Each calculator returns the pre-discount,
//! pre-rounding price as a `Decimal`; discounting and rounding to the yen
//! grid happen in [`super::engine`]. Calculators never fail: missing fields
//! take the cheapest consistent interpretation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::spec::{QuoteSpec, ServiceType};
use super::tables;

/// Price a printing job.
///
/// Unit price (base x paper multiplier + color + finishing) scaled linearly
/// against a baseline quantity of 100, with orders below 50 billed as 50.
pub fn printing_price(spec: &QuoteSpec) -> Decimal {
    let unit = tables::base_product_price(&spec.product_type)
        * tables::paper_multiplier(&spec.paper_type)
        + tables::color_modifier(&spec.print_colors)
        + tables::finishing_total(&spec.finishing);

    unit * Decimal::from(spec.quantity.max(50)) / dec!(100)
}

/// Price a binding job.
///
/// The binding-method base price carries a 10% surcharge per complete
/// 50-page increment, plus flat cover additions and finishing, scaled
/// against a baseline quantity of 10 with a floor of 10.
pub fn binding_price(spec: &QuoteSpec) -> Decimal {
    let base = tables::binding_base_price(spec.binding_type_code());

    let mut price = base + base * dec!(0.1) * Decimal::from(spec.page_count_or_zero() / 50);

    price += match spec.cover_type_code() {
        "hardcover" => dec!(5000),
        "premium" => dec!(3000),
        _ => Decimal::ZERO,
    };

    price += tables::finishing_total(&spec.finishing);

    price * Decimal::from(spec.quantity.max(10)) / dec!(10)
}

/// Price a logistics job.
///
/// Weight-based rate times the delivery-speed multiplier, then a step
/// multiplier per started batch of 100 shipped units (not a linear scale).
pub fn logistics_price(spec: &QuoteSpec) -> Decimal {
    let weight = spec
        .weight
        .and_then(Decimal::from_f64_retain)
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO);

    let base = (dec!(5000) + weight * dec!(100))
        * tables::delivery_speed_multiplier(spec.delivery_speed_code());

    let batches = ((spec.quantity.max(0) + 99) / 100).max(1);

    base * Decimal::from(batches)
}

/// Price an eco-printing job.
///
/// Runs the printing calculator, then applies a 20% eco-material premium,
/// a flat carbon-offset fee and per-certification additions.
pub fn eco_printing_price(spec: &QuoteSpec) -> Decimal {
    let mut price = printing_price(spec);

    if !spec.eco_materials.is_empty() {
        price *= dec!(1.2);
    }
    if spec.carbon_offset {
        price += dec!(3000);
    }
    price += spec
        .certifications
        .iter()
        .map(|c| tables::certification_price(c))
        .sum::<Decimal>();

    price
}

/// Estimated turnaround in days for a specification.
pub fn turnaround_days(spec: &QuoteSpec) -> i64 {
    let mut days = match spec.service_type {
        ServiceType::Printing => match spec.product_type.as_str() {
            "business-card" => 3,
            "booklet" => 10,
            _ => 5,
        },
        ServiceType::Binding => {
            let mut days = 7;
            if matches!(spec.binding_type_code(), "hardcover" | "case-bound") {
                days += 5;
            }
            if spec.page_count_or_zero() > 200 {
                days += 3;
            }
            days
        }
        ServiceType::Logistics => match spec.delivery_speed_code() {
            "express" => 2,
            "same-day" => 1,
            "international" => 14,
            _ => 5,
        },
        ServiceType::EcoPrinting => {
            if spec.certifications.is_empty() {
                7
            } else {
                9
            }
        }
        // No dedicated estimate for consulting services.
        ServiceType::SdgsConsulting | ServiceType::SustainabilityReport => 5,
    };

    // Finishing and volume adjustments apply to every service.
    if spec
        .finishing
        .iter()
        .any(|f| f == "die-cutting" || f == "embossing")
    {
        days += 3;
    } else if spec.has_finishing() {
        days += 1;
    }

    if spec.quantity > 1000 {
        days += 2;
    }

    days
}
