//! Quote assembly.
//!
//! `compute_quote` is the single entry point the forms and the chat flow
//! call: dispatch to the service calculator, apply the quantity discount,
//! round the price up to the yen grid and estimate turnaround. It is total
//! over the documented input shape and never fails.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use uuid::Uuid;

use super::calculators;
use super::spec::{Quote, QuoteSpec, ServiceType};
use super::tables;

/// Compute a quote for a specification.
///
/// Consulting and reporting services have no dedicated calculator and are
/// priced through the printing branch; see DESIGN.md.
pub fn compute_quote(spec: QuoteSpec) -> Quote {
    let raw_price = match spec.service_type {
        ServiceType::Binding => calculators::binding_price(&spec),
        ServiceType::Logistics => calculators::logistics_price(&spec),
        ServiceType::EcoPrinting => calculators::eco_printing_price(&spec),
        ServiceType::Printing
        | ServiceType::SdgsConsulting
        | ServiceType::SustainabilityReport => calculators::printing_price(&spec),
    };

    let discount_rate = tables::quantity_discount(spec.quantity);
    let discounted = raw_price - raw_price * discount_rate;
    let price = round_up_to_hundred(discounted);
    let turnaround = calculators::turnaround_days(&spec);

    Quote {
        id: next_quote_id(),
        specs: spec,
        price,
        turnaround,
        // A reached zero-rate tier still means "no discount".
        discount_applied: (discount_rate > Decimal::ZERO).then_some(discount_rate),
        created_at: None,
    }
}

/// Round a price up to the next multiple of 100 yen, clamped at zero.
fn round_up_to_hundred(amount: Decimal) -> i64 {
    let rounded = (amount / dec!(100)).ceil() * dec!(100);
    rounded.to_i64().unwrap_or(0).max(0)
}

/// Time-derived opaque quote id, unique per call.
fn next_quote_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let nonce = Uuid::new_v4().simple().to_string();
    format!("Q-{}-{}", to_base36(millis), &nonce[..6])
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flyer_spec(quantity: i64) -> QuoteSpec {
        QuoteSpec {
            product_type: "flyer".to_string(),
            paper_type: "standard".to_string(),
            print_colors: "black-and-white".to_string(),
            finishing: vec!["none".to_string()],
            quantity,
            ..QuoteSpec::defaults_for(ServiceType::Printing)
        }
    }

    #[test]
    fn test_scenario_a_flyer_at_baseline() {
        let quote = compute_quote(flyer_spec(100));
        assert_eq!(quote.price, 5000);
        assert_eq!(quote.turnaround, 5);
        assert!(quote.discount_applied.is_none());
    }

    #[test]
    fn test_scenario_b_flyer_at_thousand() {
        let quote = compute_quote(flyer_spec(1000));
        // raw 50000, 15% tier -> 42500, already on the grid; 1000 is not
        // over the volume threshold so turnaround stays at 5.
        assert_eq!(quote.price, 42500);
        assert_eq!(quote.turnaround, 5);
        assert_eq!(quote.discount_applied, Some(dec!(0.15)));
    }

    #[test]
    fn test_scenario_c_perfect_bound_book() {
        let spec = QuoteSpec {
            binding_type: Some("perfect".to_string()),
            page_count: Some(120),
            cover_type: Some("premium".to_string()),
            finishing: vec!["none".to_string()],
            quantity: 10,
            ..QuoteSpec::defaults_for(ServiceType::Binding)
        };
        let quote = compute_quote(spec);
        assert_eq!(quote.price, 6600);
        assert_eq!(quote.turnaround, 7);
        assert!(quote.discount_applied.is_none());
    }

    #[test]
    fn test_scenario_d_express_logistics() {
        let spec = QuoteSpec {
            weight: Some(5.0),
            delivery_speed: Some("express".to_string()),
            quantity: 50,
            ..QuoteSpec::defaults_for(ServiceType::Logistics)
        };
        let quote = compute_quote(spec);
        assert_eq!(quote.price, 9900);
        assert_eq!(quote.turnaround, 2);
        assert!(quote.discount_applied.is_none());
    }

    #[test]
    fn test_price_rounds_up_to_hundred() {
        let spec = QuoteSpec {
            paper_type: "premium".to_string(),
            ..flyer_spec(250)
        };
        // 5000 x 1.5 = 7500, x 2.5 = 18750, 5% off = 17812.5 -> 17900
        let quote = compute_quote(spec);
        assert_eq!(quote.price, 17900);
        assert_eq!(quote.discount_applied, Some(dec!(0.05)));
    }

    #[test]
    fn test_price_is_always_a_multiple_of_hundred() {
        for quantity in [1, 37, 99, 100, 250, 777, 1234, 4999, 10_000] {
            let spec = QuoteSpec {
                paper_type: "glossy".to_string(),
                print_colors: "spot-color".to_string(),
                finishing: vec!["foil-stamping".to_string()],
                ..flyer_spec(quantity)
            };
            let quote = compute_quote(spec);
            assert!(quote.price >= 0);
            assert_eq!(quote.price % 100, 0, "quantity {quantity}");
        }
    }

    #[test]
    fn test_discount_absent_at_zero_rate_tier() {
        for quantity in [1, 99, 100, 249] {
            let quote = compute_quote(flyer_spec(quantity));
            assert!(
                quote.discount_applied.is_none(),
                "unexpected discount at quantity {quantity}"
            );
        }
        let quote = compute_quote(flyer_spec(250));
        assert_eq!(quote.discount_applied, Some(dec!(0.05)));
    }

    #[test]
    fn test_idempotent_apart_from_id() {
        let a = compute_quote(flyer_spec(2500));
        let b = compute_quote(flyer_spec(2500));
        assert_eq!(a.price, b.price);
        assert_eq!(a.turnaround, b.turnaround);
        assert_eq!(a.discount_applied, b.discount_applied);
        assert_eq!(a.specs, b.specs);
    }

    #[test]
    fn test_quote_ids_are_unique_per_call() {
        let ids: Vec<String> = (0..64).map(|_| compute_quote(flyer_spec(100)).id).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
        assert!(ids.iter().all(|id| id.starts_with("Q-")));
    }

    #[test]
    fn test_consulting_services_price_via_printing_branch() {
        // Known gap preserved from the product: no dedicated calculator.
        let consulting = QuoteSpec {
            quantity: 100,
            company_size: Some("51-200".to_string()),
            consulting_scope: Some("full-assessment".to_string()),
            ..QuoteSpec::defaults_for(ServiceType::SdgsConsulting)
        };
        let quote = compute_quote(consulting);
        // Empty product type falls back to the "other" base: 10000 x 1.0.
        assert_eq!(quote.price, 10000);
        assert_eq!(quote.turnaround, 5);
    }

    #[test]
    fn test_engine_tolerates_hostile_but_well_typed_input() {
        let spec = QuoteSpec {
            product_type: "???".to_string(),
            paper_type: String::new(),
            print_colors: String::new(),
            finishing: Vec::new(),
            quantity: -42,
            weight: Some(-3.0),
            ..QuoteSpec::defaults_for(ServiceType::Printing)
        };
        let quote = compute_quote(spec);
        assert!(quote.price >= 0);
        assert_eq!(quote.price % 100, 0);
        assert!(quote.turnaround > 0);
    }

    #[test]
    fn test_base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
