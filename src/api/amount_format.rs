//! Currency text used for axis labels and summary figures.
//!
//! Formatting is fixed to US dollars with `,` thousands grouping.

/// Formats `amount` as whole dollars, e.g. `$60,000`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_owned();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Formats `amount` compactly, e.g. `$20k`, `$1.5M`, `$950`.
#[must_use]
pub fn format_compact_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_owned();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${}", compact_magnitude(amount.abs()))
}

/// Like [`format_compact_currency`] with an explicit `+` on positive values.
#[must_use]
pub fn format_signed_compact_currency(amount: f64) -> String {
    if amount.is_finite() && amount > 0.0 {
        format!("+{}", format_compact_currency(amount))
    } else {
        format_compact_currency(amount)
    }
}

fn compact_magnitude(value: f64) -> String {
    if value >= 999_950.0 {
        format!("{}M", trim_one_decimal(value / 1_000_000.0))
    } else if value >= 999.5 {
        format!("{}k", trim_one_decimal(value / 1_000.0))
    } else {
        format!("{}", value.round() as u64)
    }
}

fn trim_one_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_owned(),
        None => text,
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.4), "$950");
        assert_eq!(format_currency(60_000.0), "$60,000");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(-25_000.0), "-$25,000");
    }

    #[test]
    fn compacts_large_amounts() {
        assert_eq!(format_compact_currency(20_000.0), "$20k");
        assert_eq!(format_compact_currency(1_500.0), "$1.5k");
        assert_eq!(format_compact_currency(1_500_000.0), "$1.5M");
        assert_eq!(format_compact_currency(999_960.0), "$1M");
        assert_eq!(format_signed_compact_currency(425_000.0), "+$425k");
        assert_eq!(format_signed_compact_currency(-3_000.0), "-$3k");
    }
}
