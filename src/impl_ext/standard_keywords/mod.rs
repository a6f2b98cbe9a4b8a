use std::sync::LazyLock;

use crate::entities::AccountCode;

mod fallback;
mod office;
mod site;

pub use fallback::HINT_KEYWORDS;
pub use office::OFFICE_KEYWORDS;
pub use site::SITE_KEYWORDS;

/// Table scanned on the project book: the site table overlaid with the office
/// table. A keyword present in both keeps its site position but takes the
/// office code; office-only keywords follow in their own order.
pub static PROJECT_KEYWORDS: LazyLock<Vec<(&'static str, AccountCode)>> =
    LazyLock::new(|| overlay(SITE_KEYWORDS, OFFICE_KEYWORDS));

fn overlay(
    base: &[(&'static str, AccountCode)],
    top: &[(&'static str, AccountCode)],
) -> Vec<(&'static str, AccountCode)> {
    let mut merged: Vec<(&'static str, AccountCode)> = base.to_vec();
    for &(keyword, code) in top {
        match merged.iter_mut().find(|entry| entry.0 == keyword) {
            Some(entry) => entry.1 = code,
            None => merged.push((keyword, code)),
        }
    }
    merged
}
