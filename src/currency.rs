//! Currency formatting for derived display values. Formatting only; amounts
//! are stored as plain numbers.

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "CAD" => "CAD".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

/// Renders an amount as a currency string with two decimal places, thousands
/// grouping, and a leading symbol, e.g. `-$1,234.56`.
pub fn format_currency(amount: f64, code: &str) -> String {
    let negative = amount < 0.0;
    let body = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let grouped = group_digits(int_part, ',');
    let symbol = symbol_for(code);
    if negative {
        format!("-{}{}.{}", symbol, grouped, frac_part)
    } else {
        format!("{}{}.{}", symbol, grouped, frac_part)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
