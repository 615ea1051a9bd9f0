//! Quote specification and quote models.
//!
//! These types mirror the JSON blobs the frontend builds and stores, so
//! field names stay camelCase on the wire and service/product codes stay
//! kebab-case strings.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Service a quote is requested for.
///
/// `SdgsConsulting` and `SustainabilityReport` are declared in the product
/// catalog but have no dedicated calculator; the engine routes them through
/// the printing calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Printing,
    Binding,
    Logistics,
    EcoPrinting,
    SdgsConsulting,
    SustainabilityReport,
}

impl ServiceType {
    /// Kebab-case wire code for this service.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Printing => "printing",
            ServiceType::Binding => "binding",
            ServiceType::Logistics => "logistics",
            ServiceType::EcoPrinting => "eco-printing",
            ServiceType::SdgsConsulting => "sdgs-consulting",
            ServiceType::SustainabilityReport => "sustainability-report",
        }
    }
}

/// A service specification as submitted by the quote form or chat flow.
///
/// Only the base fields are meaningful for every service; the optional
/// blocks apply to binding, logistics and eco-printing respectively. The
/// engine treats missing numerics as zero and missing codes as their
/// documented defaults, so a partially filled spec always prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSpec {
    pub service_type: ServiceType,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub paper_type: String,
    #[serde(default)]
    pub print_colors: String,
    /// Selected finish codes; empty is equivalent to `["none"]`.
    #[serde(default)]
    pub finishing: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_specs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,

    // Binding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_type: Option<String>,

    // Logistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_speed: Option<String>,

    // Eco-printing
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eco_materials: Vec<String>,
    #[serde(default)]
    pub carbon_offset: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<String>,

    // SDGs consulting / sustainability report. Declared for the catalog but
    // consumed by no calculator; see DESIGN.md.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consulting_scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
}

impl QuoteSpec {
    /// Default specification the quote form starts from for a service.
    pub fn defaults_for(service_type: ServiceType) -> Self {
        let base = QuoteSpec {
            service_type,
            product_type: String::new(),
            size: String::new(),
            quantity: 100,
            paper_type: "standard".to_string(),
            print_colors: "black-and-white".to_string(),
            finishing: vec!["none".to_string()],
            custom_specs: None,
            delivery_date: None,
            delivery_address: None,
            binding_type: None,
            page_count: None,
            cover_type: None,
            weight: None,
            dimensions: None,
            delivery_speed: None,
            eco_materials: Vec::new(),
            carbon_offset: false,
            certifications: Vec::new(),
            company_size: None,
            consulting_scope: None,
            report_type: None,
        };

        match service_type {
            ServiceType::Printing => QuoteSpec {
                product_type: "flyer".to_string(),
                size: "A4".to_string(),
                ..base
            },
            ServiceType::Binding => QuoteSpec {
                product_type: "softcover-book".to_string(),
                binding_type: Some("perfect".to_string()),
                page_count: Some(50),
                cover_type: Some("standard".to_string()),
                ..base
            },
            ServiceType::Logistics => QuoteSpec {
                product_type: "other".to_string(),
                weight: Some(5.0),
                dimensions: Some("30x20x10".to_string()),
                delivery_speed: Some("standard".to_string()),
                delivery_address: Some(String::new()),
                ..base
            },
            ServiceType::EcoPrinting => QuoteSpec {
                product_type: "flyer".to_string(),
                size: "A4".to_string(),
                paper_type: "recycled".to_string(),
                eco_materials: vec!["recycled-paper".to_string()],
                ..base
            },
            _ => base,
        }
    }

    /// Binding method, defaulting to perfect binding when unset.
    pub fn binding_type_code(&self) -> &str {
        self.binding_type.as_deref().unwrap_or("perfect")
    }

    /// Cover type, defaulting to a standard cover when unset.
    pub fn cover_type_code(&self) -> &str {
        self.cover_type.as_deref().unwrap_or("standard")
    }

    /// Delivery speed, defaulting to standard shipping when unset.
    pub fn delivery_speed_code(&self) -> &str {
        self.delivery_speed.as_deref().unwrap_or("standard")
    }

    /// Page count clamped to zero; unset counts as zero pages.
    pub fn page_count_or_zero(&self) -> i64 {
        self.page_count.unwrap_or(0).max(0)
    }

    /// True if any finish other than `none` is selected.
    pub fn has_finishing(&self) -> bool {
        self.finishing.iter().any(|f| f != "none")
    }
}

/// A computed quote. Immutable once produced; editing the specification
/// yields a new quote with a new id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub specs: QuoteSpec,
    /// Final price in yen, always a multiple of 100.
    pub price: i64,
    /// Estimated turnaround in days.
    pub turnaround: i64,
    /// Discount rate actually applied; absent when no tier was met.
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_applied: Option<Decimal>,
    /// Stamped by the quote store on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
