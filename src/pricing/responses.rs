//! Response DTOs for quote API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::formatters;
use super::spec::Quote;

/// A quote enriched with display fields for the frontend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: Quote,
    pub service_name: String,
    pub formatted_price: String,
    pub specs_display: SpecsDisplayResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountResponse>,
}

/// Japanese display names for the specification codes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecsDisplayResponse {
    pub product: String,
    pub size: String,
    pub paper: String,
    pub colors: String,
    pub finishing: Vec<String>,
}

/// Discount breakdown for a discounted quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub percentage: Decimal,
    pub amount: i64,
    pub formatted_amount: String,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        let discount = formatters::discount_breakdown(quote.price, quote.discount_applied).map(
            |breakdown| DiscountResponse {
                percentage: breakdown.discount_percentage,
                formatted_amount: formatters::format_yen(breakdown.discount_amount),
                amount: breakdown.discount_amount,
            },
        );

        let specs_display = SpecsDisplayResponse {
            product: formatters::product_type_name(&quote.specs.product_type).to_string(),
            size: formatters::size_name(&quote.specs.size).to_string(),
            paper: formatters::paper_type_name(&quote.specs.paper_type).to_string(),
            colors: formatters::print_color_name(&quote.specs.print_colors).to_string(),
            finishing: quote
                .specs
                .finishing
                .iter()
                .map(|f| formatters::finishing_name(f).to_string())
                .collect(),
        };

        QuoteResponse {
            service_name: formatters::service_type_name(quote.specs.service_type).to_string(),
            formatted_price: formatters::format_yen(quote.price),
            specs_display,
            discount,
            quote,
        }
    }
}
