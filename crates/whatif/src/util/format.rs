/// Insert thousands separators into a whole number
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value
pub fn format_currency(value: f64) -> String {
    let total_cents = (value.abs() * 100.0).round() as u64;
    let dollars = group_thousands(total_cents / 100);
    let cents = total_cents % 100;

    if value >= 0.0 || total_cents == 0 {
        format!("${dollars}.{cents:02}")
    } else {
        format!("-${dollars}.{cents:02}")
    }
}

/// Format a currency value without cents (shorter format for tight columns)
pub fn format_currency_short(value: f64) -> String {
    let dollars = value.abs().round() as u64;
    if value >= 0.0 || dollars == 0 {
        format!("${}", group_thousands(dollars))
    } else {
        format!("-${}", group_thousands(dollars))
    }
}

/// Format a signed currency change, e.g. `+$1,250.00`
pub fn format_currency_change(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

/// Format a fractional value as a percentage (`0.1` -> `10.00%`)
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a fractional modification with its sign (`-0.05` -> `-5.0%`)
pub fn format_delta(value: f64) -> String {
    format!("{:+.1}%", value * 100.0)
}

/// Format a value already expressed in percent with its sign
/// (`12.5` -> `+12.50%`)
pub fn format_percent_change(percent: f64) -> String {
    format!("{percent:+.2}%")
}

/// Format a user count with thousands separators
pub fn format_users(value: f64) -> String {
    group_thousands(value.max(0.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-42.5), "-$42.50");
        // Carries into dollars instead of printing 100 cents
        assert_eq!(format_currency(9.999), "$10.00");
    }

    #[test]
    fn test_format_currency_short() {
        assert_eq!(format_currency_short(999.6), "$1,000");
        assert_eq!(format_currency_short(-1500.0), "-$1,500");
        assert_eq!(format_currency_short(-0.2), "$0");
    }

    #[test]
    fn test_format_changes() {
        assert_eq!(format_currency_change(1250.0), "+$1,250.00");
        assert_eq!(format_currency_change(-3.0), "-$3.00");
        assert_eq!(format_percent_change(12.5), "+12.50%");
        assert_eq!(format_percent_change(-100.0), "-100.00%");
        assert_eq!(format_delta(-0.05), "-5.0%");
        assert_eq!(format_percentage(0.1), "10.00%");
    }

    #[test]
    fn test_format_users() {
        assert_eq!(format_users(10_000.4), "10,000");
        assert_eq!(format_users(999.0), "999");
    }
}
