/// Format a currency value with thousands separators and cents.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let total_cents = (value.abs() * 100.0).round() as i64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    let mut digits = dollars.to_string();
    let mut i = digits.len();
    while i > 3 {
        i -= 3;
        digits.insert(i, ',');
    }

    format!("{sign}${digits}.{cents:02}")
}

/// Format a fraction as a percentage with one decimal.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
