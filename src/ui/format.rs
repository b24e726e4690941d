//! Display formatting for table cells. Values stay unrounded in the model;
//! only the rendered text is rounded.

/// `$1,234.57`, `-$12.00`. Rounded half away from zero to cents.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let cents = (value.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc() as u128;
    let fraction = (cents % 100.0) as u8;
    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(whole), fraction)
}

/// EPS is shown as delivered, without currency rounding.
pub fn format_raw(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "-".to_string()
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
