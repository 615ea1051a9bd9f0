//! Display helpers for quotes.
//!
//! Japanese display names for the kebab-case codes, yen formatting and the
//! discount breakdown shown next to a discounted price. Used by the quote
//! responses and the admin template.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use super::spec::ServiceType;

pub fn service_type_name(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::Printing => "印刷",
        ServiceType::Binding => "製本",
        ServiceType::Logistics => "物流",
        ServiceType::EcoPrinting => "環境印刷",
        ServiceType::SdgsConsulting => "SDGsコンサルティング",
        ServiceType::SustainabilityReport => "サステナビリティレポート",
    }
}

pub fn product_type_name(code: &str) -> &str {
    match code {
        "business-card" => "名刺",
        "flyer" => "チラシ",
        "brochure" => "パンフレット",
        "poster" => "ポスター",
        "booklet" => "冊子",
        "postcard" => "ポストカード",
        "stationery" => "文房具",
        "other" => "その他",
        _ => code,
    }
}

/// The quote form submits sizes as their display form (`A4`), so most
/// codes pass straight through; the lowercase aliases cover older stored
/// blobs.
pub fn size_name(code: &str) -> &str {
    match code {
        "a3" => "A3",
        "a4" => "A4",
        "a5" => "A5",
        "b4" => "B4",
        "b5" => "B5",
        "postcard" => "ハガキ",
        "business-card" => "名刺サイズ",
        "custom" => "カスタム",
        _ => code,
    }
}

pub fn paper_type_name(code: &str) -> &str {
    match code {
        "standard" => "普通紙",
        "premium" => "上質紙",
        "recycled" => "再生紙",
        "glossy" => "光沢紙",
        "matte" => "マット紙",
        "textured" => "エンボス紙",
        "eco-friendly" => "エコフレンドリー紙",
        "fsc-certified" => "FSC認証紙",
        _ => code,
    }
}

pub fn print_color_name(code: &str) -> &str {
    match code {
        "black-and-white" => "モノクロ",
        "full-color-one-side" => "フルカラー（片面）",
        "full-color-both-sides" => "フルカラー（両面）",
        "spot-color" => "特色",
        "pantone" => "パントン",
        "vegetable-ink" => "植物性インク",
        _ => code,
    }
}

pub fn finishing_name(code: &str) -> &str {
    match code {
        "none" => "なし",
        "folding" => "折り",
        "binding" => "製本",
        "lamination" => "ラミネート",
        "die-cutting" => "型抜き",
        "embossing" => "エンボス",
        "foil-stamping" => "箔押し",
        "uv-coating" => "UVコート",
        "eco-varnish" => "エコニス",
        _ => code,
    }
}

/// Format an integer yen amount as `¥1,234,500`.
pub fn format_yen(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-¥{grouped}")
    } else {
        format!("¥{grouped}")
    }
}

/// Discount breakdown recovered from a final price and the applied rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountBreakdown {
    pub discount_percentage: Decimal,
    pub discount_amount: i64,
}

/// Recover the pre-discount price and the amount saved. Returns `None`
/// when no discount was applied.
pub fn discount_breakdown(price: i64, discount_applied: Option<Decimal>) -> Option<DiscountBreakdown> {
    let rate = discount_applied.filter(|r| *r > Decimal::ZERO && *r < Decimal::ONE)?;

    let original = (Decimal::from(price) / (Decimal::ONE - rate))
        .round()
        .to_i64()?;

    Some(DiscountBreakdown {
        discount_percentage: rate * dec!(100),
        discount_amount: original - price,
    })
}
