use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:nan|none)\b").expect("valid regex"));
static REPEATED_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));

/// Word prepended to memos ("for ...").
pub(crate) const PREFIX_WORD: &str = "بابت";

/// Whether a trimmed cell stands for "no value".
pub(crate) fn is_placeholder(s: &str) -> bool {
    s.is_empty() || s == "-" || s.eq_ignore_ascii_case("nan") || s.eq_ignore_ascii_case("none")
}

/// Trimmed free text, with placeholders mapped to "".
pub(crate) fn clean_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(s) if !is_placeholder(s) => s.to_string(),
        _ => String::new(),
    }
}

/// Drops placeholder tokens and collapses repeated spaces.
pub(crate) fn clean_description(text: &str) -> String {
    let without_tokens = PLACEHOLDER_TOKEN.replace_all(text, "");
    REPEATED_SPACES
        .replace_all(&without_tokens, " ")
        .trim()
        .to_string()
}

pub(crate) fn ensure_prefixed(text: &str) -> String {
    let t = text.trim();
    if t.is_empty() {
        PREFIX_WORD.to_string()
    } else if t.starts_with(PREFIX_WORD) {
        t.to_string()
    } else {
        format!("{} {}", PREFIX_WORD, t)
    }
}
