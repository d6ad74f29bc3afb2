//! Number formatting for report values.

/// Formats `value` with `decimals` decimal places and comma thousands
/// separators (`1234567.891, 2` -> `"1,234,567.89"`).
#[must_use]
pub fn format_amount(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{value:.decimals$}");
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" reads as noise in a report
    let is_zero = grouped.chars().all(|c| c == '0' || c == ',')
        && frac_part.is_none_or(|f| f.chars().all(|c| c == '0'));
    let sign = if is_zero { "" } else { sign };

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a growth percentage with one decimal (`10.0%`).
#[must_use]
pub fn format_percent(rate: f64) -> String {
    format!("{rate:.1}%")
}
