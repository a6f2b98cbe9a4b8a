use super::text_model::is_placeholder;

/// Float-then-truncate coercion, so "123.0" reads as "123".
fn integer_string(s: &str) -> Option<String> {
    let f = s.trim().parse::<f64>().ok().filter(|f| f.is_finite())?;
    Some((f.trunc() as i128).to_string())
}

/// Integer-only rendition of an identifier cell (invoice or receipt number).
///
/// Hyphenated ranges such as "2532-2534" are normalized part by part, dropping
/// parts that are not numbers. Anything unconvertible yields "".
pub(crate) fn normalize_integer(value: &str) -> String {
    let s = value.trim();
    if is_placeholder(s) {
        return String::new();
    }
    if s.contains('-') {
        return s
            .split('-')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .filter_map(integer_string)
            .collect::<Vec<_>>()
            .join("-");
    }
    integer_string(s).unwrap_or_default()
}

/// Six-digit cost-center code. Falls back to the digits found in the cell when
/// it is not a number; yields "" when there are none.
pub(crate) fn normalize_cost_center(value: &str) -> String {
    let s = value.trim();
    if is_placeholder(s) {
        return String::new();
    }
    let digits = match integer_string(s) {
        Some(i) => i,
        None => s.chars().filter(|c| c.is_ascii_digit()).collect(),
    };
    if digits.is_empty() {
        return String::new();
    }
    zfill(&digits, 6)
}

/// Left-pads with zeros to `width`, keeping a leading sign in front.
pub(crate) fn zfill(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let padding = "0".repeat(width - len);
    match s.chars().next() {
        Some(sign @ ('-' | '+')) => format!("{}{}{}", sign, padding, &s[1..]),
        _ => format!("{}{}", padding, s),
    }
}
