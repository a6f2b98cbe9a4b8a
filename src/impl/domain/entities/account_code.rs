/// Ledger account code ("kod-e moein") in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountCode(pub u32);

impl AccountCode {
    pub fn code(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AccountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which coding rules apply to an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookType {
    HeadOffice,
    Project,
}

/// Whether an expense is goods or a service, for VAT reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyKind {
    Goods,
    Service,
}

impl SupplyKind {
    pub fn label(&self) -> &'static str {
        match self {
            SupplyKind::Goods => "کالا",
            SupplyKind::Service => "خدمت",
        }
    }
}
