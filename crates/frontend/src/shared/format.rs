//! Display formatting for prices, percentages and timestamps.

/// Group an integer part with thin spaces every three digits.
fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(ch);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

/// Format a price with two decimals and a currency code: "1 234.50 JPY".
pub fn format_price(value: f64, currency: &str) -> String {
    let cents = (value * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = (cents % 100).abs();
    // keep the sign with the integer part even for -0.xx
    let integer = if whole == 0 && cents < 0 {
        format!("-{}", group_thousands(0))
    } else {
        group_thousands(whole)
    };
    format!("{integer}.{frac:02} {currency}")
}

/// Like [`format_price`] but shows "-" for missing values.
pub fn format_price_opt(value: Option<f64>, currency: &str) -> String {
    match value {
        Some(v) => format_price(v, currency),
        None => "-".to_string(),
    }
}

/// Signed percentage with one decimal: "+12.3%" / "-4.0%".
pub fn format_percent(value: f64) -> String {
    format!("{value:+.1}%")
}

pub fn format_percent_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format_percent(v),
        None => "-".to_string(),
    }
}

/// "15.03.2024 14:02" in UTC; minutes are enough for scan timestamps.
pub fn format_datetime(value: &chrono::DateTime<chrono::Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

pub fn format_datetime_opt(value: Option<&chrono::DateTime<chrono::Utc>>) -> String {
    match value {
        Some(v) => format_datetime(v),
        None => "-".to_string(),
    }
}

pub fn format_date(value: &chrono::NaiveDate) -> String {
    value.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn prices_are_grouped_and_padded() {
        assert_eq!(format_price(1234.5, "JPY"), "1\u{202f}234.50 JPY");
        assert_eq!(format_price(0.0, "EUR"), "0.00 EUR");
        assert_eq!(format_price(1234567.891, "USD"), "1\u{202f}234\u{202f}567.89 USD");
        assert_eq!(format_price(-1234.56, "JPY"), "-1\u{202f}234.56 JPY");
        assert_eq!(format_price(-0.25, "JPY"), "-0.25 JPY");
    }

    #[test]
    fn missing_values_render_a_dash() {
        assert_eq!(format_price_opt(None, "JPY"), "-");
        assert_eq!(format_percent_opt(None), "-");
        assert_eq!(format_datetime_opt(None), "-");
    }

    #[test]
    fn percent_carries_a_sign() {
        assert_eq!(format_percent(12.34), "+12.3%");
        assert_eq!(format_percent(-4.0), "-4.0%");
        assert_eq!(format_percent(0.0), "+0.0%");
    }

    #[test]
    fn datetime_format() {
        let ts = chrono::Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&ts), "15.03.2024 14:02");
        assert_eq!(
            format_date(&chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
            "31.12.2024"
        );
    }
}
