use crate::entities::{AccountCode, SupplyKind};

pub const VAT_RECEIVABLE: AccountCode = AccountCode(3221);

// Fixed VAT-reporting attributes.
pub const TAX_STATUS_SUBJECT: &str = "مشمول";
pub const TAX_STATUS_EXEMPT: &str = "معاف";
pub const DOMESTIC_MARKER: &str = "داخلی";
pub const PURCHASE_MARKER: &str = "خرید";
pub const REPORTING_CODE: &str = "5058";

/// Goods-vs-service tag per expense account. Accounts missing from the table
/// get no tag.
pub const SUPPLY_KINDS: &[(AccountCode, SupplyKind)] = &[
    (AccountCode(7201), SupplyKind::Service),
    (AccountCode(7202), SupplyKind::Service),
    (AccountCode(7203), SupplyKind::Goods),
    (AccountCode(7204), SupplyKind::Goods),
    (AccountCode(7205), SupplyKind::Service),
    (AccountCode(7208), SupplyKind::Service),
    (AccountCode(7210), SupplyKind::Goods),
    (AccountCode(7212), SupplyKind::Service),
    (AccountCode(7215), SupplyKind::Goods),
    (AccountCode(7216), SupplyKind::Service),
    (AccountCode(7219), SupplyKind::Goods),
    (AccountCode(7226), SupplyKind::Goods),
    (AccountCode(7252), SupplyKind::Goods),
    (AccountCode(7296), SupplyKind::Service),
    (AccountCode(7298), SupplyKind::Service),
    (AccountCode(7301), SupplyKind::Service),
    (AccountCode(7302), SupplyKind::Service),
    (AccountCode(7303), SupplyKind::Service),
    (AccountCode(7304), SupplyKind::Service),
    (AccountCode(7310), SupplyKind::Service),
    (AccountCode(7315), SupplyKind::Service),
    (AccountCode(7330), SupplyKind::Service),
    (AccountCode(7331), SupplyKind::Service),
    (AccountCode(7341), SupplyKind::Service),
    (AccountCode(7350), SupplyKind::Service),
];

pub fn supply_kind(code: AccountCode) -> Option<SupplyKind> {
    SUPPLY_KINDS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, kind)| *kind)
}
