//! Admin page listing saved quotes.

use askama::Template;
use axum::{extract::State, response::Html};

use crate::error::PageError;
use crate::pricing::formatters;
use crate::pricing::Quote;
use crate::AppState;

/// Saved-quotes admin template
#[derive(Template)]
#[template(path = "admin/quotes.html")]
struct AdminQuotesTemplate {
    rows: Vec<QuoteRow>,
    has_quotes: bool,
    count: usize,
}

struct QuoteRow {
    id: String,
    service_name: String,
    product_name: String,
    quantity: i64,
    formatted_price: String,
    turnaround: i64,
    discount_label: String,
    created_label: String,
}

impl From<Quote> for QuoteRow {
    fn from(quote: Quote) -> Self {
        let discount_label = formatters::discount_breakdown(quote.price, quote.discount_applied)
            .map(|b| format!("{}%", b.discount_percentage.normalize()))
            .unwrap_or_else(|| "—".to_string());

        let created_label = quote
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "—".to_string());

        QuoteRow {
            id: quote.id,
            service_name: formatters::service_type_name(quote.specs.service_type).to_string(),
            product_name: formatters::product_type_name(&quote.specs.product_type).to_string(),
            quantity: quote.specs.quantity,
            formatted_price: formatters::format_yen(quote.price),
            turnaround: quote.turnaround,
            discount_label,
            created_label,
        }
    }
}

/// Render the saved-quotes table. Failures here render an HTML error page
/// rather than the JSON body the API routes use.
pub async fn quotes_page(
    State(state): State<AppState>,
) -> std::result::Result<Html<String>, PageError> {
    let quotes = state.quotes.list().await;

    let template = AdminQuotesTemplate {
        has_quotes: !quotes.is_empty(),
        count: quotes.len(),
        rows: quotes.into_iter().map(QuoteRow::from).collect(),
    };

    Ok(Html(template.render()?))
}
