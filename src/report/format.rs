/// Thousands separator used in every monetary figure
pub const THOUSANDS_SEPARATOR: char = '.';

/// Group digits in threes: 1234567 -> "1.234.567"
pub fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }

    grouped
}

/// Full figure: 154000 -> "$154.000"
pub fn format_amount(value: i128) -> String {
    format!("${}", group_thousands(value))
}

/// Whole thousands, truncated toward zero: 2070000 -> "$2.070K"
pub fn format_thousands(value: i128) -> String {
    format!("${}K", group_thousands(value / 1000))
}

/// Fractional figure rounded to whole units: 7123.5 -> "$7.124"
pub fn format_rounded(value: f64) -> String {
    format_amount(value.round() as i128)
}
