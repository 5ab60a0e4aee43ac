//! Number formatting shared by the ticker and the market tables.

use itertools::Itertools;

/// Placeholder for a missing value
pub const PLACEHOLDER: &str = "—";

/// Format `price` with thousands separators.
///
/// Prices of at least one dollar keep two decimals; sub-dollar prices keep up
/// to six, trimmed of trailing zeros but never fewer than two.
pub fn fmt_price(price: f64) -> String {
    if !price.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let decimals = if price.abs() >= 1.0 { 2 } else { 6 };
    let fixed = format!("{:.*}", decimals, price.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < 2 {
        frac.push('0');
    }

    let sign = if price < 0.0 { "-" } else { "" };
    format!("{sign}{}.{frac}", group_thousands(int_part))
}

/// Insert `,` between every group of three digits.
pub fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let head = chars.len() % 3;
    let mut groups = Vec::with_capacity(chars.len() / 3 + 1);
    if head > 0 {
        groups.push(chars[..head].iter().collect::<String>());
    }
    groups.extend(chars[head..].chunks(3).map(|chunk| chunk.iter().collect::<String>()));
    groups.into_iter().join(",")
}

/// Signed percentage with two decimals, or the placeholder when missing.
pub fn fmt_change(change: Option<f64>) -> String {
    match change {
        Some(change) if change.is_finite() => format!("{change:+.2}%"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Compact market cap (`$1.30T`, `$512.40B`, `$3.10M`), or the placeholder.
pub fn fmt_market_cap(market_cap: Option<f64>) -> String {
    const UNITS: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];

    let Some(cap) = market_cap.filter(|cap| cap.is_finite() && *cap >= 0.0) else {
        return PLACEHOLDER.to_string();
    };

    UNITS
        .iter()
        .find(|(scale, _)| cap >= *scale)
        .map(|(scale, unit)| format!("${:.2}{unit}", cap / scale))
        .unwrap_or_else(|| format!("${}", group_thousands(&format!("{cap:.0}"))))
}
