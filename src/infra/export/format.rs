/// `1234567` -> `1,234,567`.
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string(), |_| 3)
}

/// Indian grouping: last three digits, then pairs. `1234567` -> `12,34,567`.
pub fn group_indian(value: u64) -> String {
    group_digits(&value.to_string(), |group| if group == 0 { 3 } else { 2 })
}

fn group_digits(digits: &str, width_of: impl Fn(usize) -> usize) -> String {
    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut group = 0;
    while end > 0 {
        let start = end.saturating_sub(width_of(group));
        groups.push(&digits[start..end]);
        end = start;
        group += 1;
    }
    groups.reverse();
    groups.join(",")
}

pub fn format_currency_2dp(value: f64, symbol: &str) -> String {
    if value < 0.0 {
        format!("-{symbol}{:.2}", value.abs())
    } else {
        format!("{symbol}{value:.2}")
    }
}

pub fn format_percent_2dp(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_percent_1dp(value: f64) -> String {
    format!("{value:.1}%")
}

/// Whole-unit currency with Indian grouping, as on the metric cards.
pub fn format_currency_whole(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rounded = value.abs().round() as u64;
    let sign = if value < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{sign}{symbol}{}", group_indian(rounded))
}

pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rounded = value.abs().round() as u64;
    let sign = if value < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{sign}{}", group_indian(rounded))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
