//! Display helpers for the terminal dashboard. Unparseable upstream strings
//! are shown verbatim rather than dropped.

pub fn format_price(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format_currency(value),
        _ => raw.to_string(),
    }
}

pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(value.abs()))
}

/// Base-asset volume with K/M scaling, e.g. `₿1.23M`.
pub fn format_volume(raw: &str) -> String {
    let Ok(volume) = raw.trim().parse::<f64>() else {
        return raw.to_string();
    };
    if volume >= 1_000_000.0 {
        format!("₿{:.2}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("₿{:.2}K", volume / 1_000.0)
    } else {
        format!("₿{volume:.2}")
    }
}

pub fn format_percentage(raw: &str) -> String {
    let Ok(percent) = raw.trim().parse::<f64>() else {
        return raw.to_string();
    };
    format_signed_percent(percent)
}

pub fn format_signed_percent(percent: f64) -> String {
    let sign = if percent >= 0.0 { "+" } else { "" };
    format!("{sign}{percent:.2}%")
}

/// Two-decimal representation with comma thousands grouping.
fn group_thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{grouped}.{frac_part}")
}
