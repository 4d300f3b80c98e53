use rust_decimal::Decimal;

fn two_places(value: Decimal) -> Decimal {
    let rounded = value.round_dp(2);
    // Rounding can leave a negative zero behind, which would print as "-0.00".
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,234.56`; negatives keep the sign after the symbol: `$-1,234.56`.
pub fn currency(value: Decimal) -> String {
    let value = two_places(value);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", value.abs());
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("${sign}{}.{frac}", group_thousands(int))
}

/// `5.00%`. The value is already a percent, not a fraction.
pub fn percent(value: Decimal) -> String {
    format!("{:.2}%", two_places(value))
}

/// Share counts as the broker reports them, without trailing zeros.
pub fn quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_groups_thousands_with_two_decimals() {
        assert_eq!(currency(dec!(10500)), "$10,500.00");
        assert_eq!(currency(dec!(150)), "$150.00");
        assert_eq!(currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(currency(dec!(0)), "$0.00");
        assert_eq!(currency(dec!(999.999)), "$1,000.00");
    }

    #[test]
    fn negative_currency_keeps_sign_after_symbol() {
        assert_eq!(currency(dec!(-1234.5)), "$-1,234.50");
        assert_eq!(currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(percent(dec!(5)), "5.00%");
        assert_eq!(percent(dec!(-2.345)), "-2.34%");
        assert_eq!(percent(dec!(12.3456)), "12.35%");
    }

    #[test]
    fn quantity_drops_trailing_zeros() {
        assert_eq!(quantity(dec!(10.000)), "10");
        assert_eq!(quantity(dec!(0.50)), "0.5");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }
}
