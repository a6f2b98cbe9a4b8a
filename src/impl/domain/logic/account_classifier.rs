use crate::{
    entities::{AccountCode, BookType},
    ext::{
        standard_accounts::{HEAD_OFFICE_DEFAULT, LOCAL_TRANSPORT, PROJECT_DEFAULT},
        standard_keywords::{HINT_KEYWORDS, OFFICE_KEYWORDS, PROJECT_KEYWORDS},
        standard_payers::{is_courier_payer, COURIER_ERRAND_KEYWORDS},
    },
};

/// Maps a free-text description to an account code.
///
/// Keywords are matched as substrings of the lowercased description, and the
/// first table entry found wins. Table order is therefore part of the rules:
/// a coarse keyword listed early shadows a more specific one listed later.
pub(crate) fn classify(description: &str, book_type: BookType, payer: &str) -> AccountCode {
    if description.trim().is_empty() {
        return default_for(book_type);
    }
    let desc_lower = description.to_lowercase();

    if is_courier_payer(payer)
        && COURIER_ERRAND_KEYWORDS
            .iter()
            .any(|word| desc_lower.contains(word))
    {
        return LOCAL_TRANSPORT;
    }

    match book_type {
        BookType::HeadOffice => first_match(&desc_lower, OFFICE_KEYWORDS),
        BookType::Project => first_match(&desc_lower, &PROJECT_KEYWORDS),
    }
    .unwrap_or_else(|| default_for(book_type))
}

/// Resolves the optional keyword-hint column, if it names a known category.
pub(crate) fn classify_hint(hint: &str) -> Option<AccountCode> {
    if hint.trim().is_empty() {
        return None;
    }
    first_match(&hint.to_lowercase(), HINT_KEYWORDS)
}

fn first_match(desc_lower: &str, table: &[(&str, AccountCode)]) -> Option<AccountCode> {
    table
        .iter()
        .find(|(keyword, _)| desc_lower.contains(keyword))
        .map(|(_, code)| *code)
}

fn default_for(book_type: BookType) -> AccountCode {
    match book_type {
        BookType::HeadOffice => HEAD_OFFICE_DEFAULT,
        BookType::Project => PROJECT_DEFAULT,
    }
}
