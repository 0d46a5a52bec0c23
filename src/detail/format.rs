//! Text formatting for ratio values and their changes.

/// Placeholder shown for any value that depends on missing data.
pub const NOT_AVAILABLE: &str = "N/A";

/// Ratio as a percentage with two decimals: 0.6123 -> "61.23%".
pub fn format_percent(ratio: Option<f64>) -> String {
    match ratio.filter(|r| r.is_finite()) {
        Some(r) => format!("{:.2}%", r * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Ratio change in percentage points with two decimals: 0.0215 -> "2.15 pp".
pub fn format_points(change: Option<f64>) -> String {
    match change.filter(|c| c.is_finite()) {
        Some(c) => format!("{:.2} pp", c * 100.0),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Escape text for inclusion in HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
