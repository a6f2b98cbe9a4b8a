use crate::entities::AccountCode;

/// Custodian float; the account credited by settlement rows.
pub const PETTY_CASH_SETTLEMENT: AccountCode = AccountCode(1131);
/// Warehouse receipts and internal turnover.
pub const INVENTORY_RECEIPT: AccountCode = AccountCode(3120);
pub const BANK_FEES: AccountCode = AccountCode(7512);

/// Fallback when a head-office description matches no keyword.
pub const HEAD_OFFICE_DEFAULT: AccountCode = AccountCode(7296);
/// Fallback for uncategorized site expenses.
pub const PROJECT_DEFAULT: AccountCode = AccountCode(7350);
/// Forced for "send"/"bring" errands of the courier payers.
pub const LOCAL_TRANSPORT: AccountCode = AccountCode(7216);

/// Level-4 segment forced on warehouse-receipt rows.
pub const INVENTORY_RECEIPT_LEVEL4: &str = "200082";
/// Level-5 segment identifying the head-office book.
pub const HEAD_OFFICE_LEVEL5: &str = "006003";
