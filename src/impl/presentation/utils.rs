use num_format::{Locale, ToFormattedString as _};

const FRACTION_DIGITS: usize = 2;

/// Format an amount with thousands separators (ex. 1,250,000).
///
/// Rial amounts are whole numbers in practice, so the fractional part is only
/// printed when present, rounded to two places. Uses the en locale regardless
/// of the user's locale.
pub(crate) fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    let magnitude = rounded.abs();
    let integer_part = (magnitude.trunc() as i64).to_formatted_string(&Locale::en);
    if magnitude.fract() == 0.0 {
        return format!("{}{}", sign, integer_part);
    }
    let fractional_part = format!("{:.FRACTION_DIGITS$}", magnitude.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!("{}{}.{}", sign, integer_part, fractional_part)
}
