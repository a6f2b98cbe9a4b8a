use crate::entities::TURNOVER_MARKER;

/// Grouped-payment flag. Numeric cells are set when non-zero; any other
/// non-blank text counts as set, including text that fails to parse.
pub(crate) fn is_group_flag(value: Option<&str>) -> bool {
    let Some(s) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return false;
    };
    match s.parse::<f64>() {
        Ok(f) => f != 0.0,
        Err(_) => true,
    }
}

pub(crate) fn is_turnover(value: Option<&str>) -> bool {
    value.map(str::trim) == Some(TURNOVER_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_group_flags() {
        assert!(is_group_flag(Some("1")));
        assert!(is_group_flag(Some("2.5")));
        assert!(!is_group_flag(Some("0")));
        assert!(!is_group_flag(Some("0.0")));
    }

    #[test]
    fn blank_group_flag_is_unset() {
        assert!(!is_group_flag(None));
        assert!(!is_group_flag(Some("")));
        assert!(!is_group_flag(Some("   ")));
    }

    #[test]
    fn any_text_sets_group_flag() {
        // Suspiciously broad: stray text in the column opens a group. Kept
        // until the sheet owners confirm which values are meant to count.
        assert!(is_group_flag(Some("بله")));
        assert!(is_group_flag(Some("x")));
        assert!(is_group_flag(Some("nan")));
        assert!(is_group_flag(Some("خیر")));
    }

    #[test]
    fn turnover_requires_exact_marker() {
        assert!(is_turnover(Some(" گردش ")));
        assert!(!is_turnover(Some("گردش حساب")));
        assert!(!is_turnover(None));
    }
}
