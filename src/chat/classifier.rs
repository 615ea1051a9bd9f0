//! Keyword service-type classifier.
//!
//! Routes a free-text message to the service whose keywords appear first
//! in the priority order printing, binding, logistics, eco-printing.
//! Messages matching nothing default to printing.

use crate::pricing::ServiceType;

const PRINTING_KEYWORDS: &[&str] = &[
    "印刷",
    "名刺",
    "チラシ",
    "ポスター",
    "パンフレット",
    "print",
    "flyer",
    "poster",
    "brochure",
    "business card",
];

const BINDING_KEYWORDS: &[&str] = &[
    "製本",
    "冊子",
    "書籍",
    "ハードカバー",
    "ソフトカバー",
    "綴じ",
    "binding",
    "booklet",
    "hardcover",
    "softcover",
];

const LOGISTICS_KEYWORDS: &[&str] = &[
    "物流",
    "配送",
    "発送",
    "梱包",
    "保管",
    "輸送",
    "logistics",
    "shipping",
    "delivery",
];

const ECO_KEYWORDS: &[&str] = &[
    "環境",
    "エコ",
    "リサイクル",
    "再生紙",
    "fsc",
    "カーボン",
    "eco",
    "recycled",
    "carbon",
    "sustainable",
];

/// Detect the service a message is about.
pub fn detect_service_type(message: &str) -> ServiceType {
    let message = message.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|kw| message.contains(kw));

    if contains_any(PRINTING_KEYWORDS) {
        ServiceType::Printing
    } else if contains_any(BINDING_KEYWORDS) {
        ServiceType::Binding
    } else if contains_any(LOGISTICS_KEYWORDS) {
        ServiceType::Logistics
    } else if contains_any(ECO_KEYWORDS) {
        ServiceType::EcoPrinting
    } else {
        ServiceType::Printing
    }
}

/// True when the user is asking for an estimate.
pub fn wants_estimate(message: &str) -> bool {
    let lower = message.to_lowercase();
    message.contains("見積") || lower.contains("quote") || lower.contains("estimate")
}
