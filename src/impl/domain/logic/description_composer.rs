use crate::{
    data::models::text_model::{clean_description, ensure_prefixed},
    entities::RunConfig,
};

/// Word stripped from seller names ("store").
const STORE_WORD: &str = "فروشگاه";

/// Record fields that feed the row memo, already normalized.
#[derive(Debug, Default)]
pub(crate) struct MemoParts<'a> {
    pub description: &'a str,
    pub receipt_number: &'a str,
    pub invoice_number: &'a str,
    pub seller: &'a str,
    pub cost_date: &'a str,
}

pub(crate) struct DescriptionComposer<'c> {
    config: &'c RunConfig,
}

impl<'c> DescriptionComposer<'c> {
    pub(crate) fn new(config: &'c RunConfig) -> Self {
        Self { config }
    }

    /// Full memo of an expense row.
    pub(crate) fn memo(&self, parts: &MemoParts) -> String {
        let seller = parts.seller.replace(STORE_WORD, "");
        let receipt_clause = (!parts.receipt_number.is_empty())
            .then(|| format!("به شماره رسید انبار {}", parts.receipt_number));
        let invoice_clause = (!parts.invoice_number.is_empty())
            .then(|| format!("شماره فاکتور {}", parts.invoice_number));
        // A receipt already dates the expense.
        let date_clause = (parts.receipt_number.is_empty() && !parts.cost_date.is_empty())
            .then(|| format!("مورخ {}", parts.cost_date));

        let memo = [
            Some(parts.description.to_string()),
            receipt_clause,
            invoice_clause,
            Some(seller),
            date_clause,
            Some(self.run_clause()),
        ]
        .into_iter()
        .flatten()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
        clean_description(&memo)
    }

    /// Fixed summary memo shared by every row of the run.
    pub(crate) fn summary(&self) -> String {
        format!(
            "صورتخلاصه تنخواه شماره {} طی تنخواه {} پروژه {}",
            self.config.petty_cash_number, self.config.payer_name, self.config.project_name
        )
    }

    pub(crate) fn vat_memo(&self) -> String {
        ensure_prefixed("ارزش افزوده")
    }

    pub(crate) fn bank_fee_memo(&self) -> String {
        ensure_prefixed("کارمزد بانکی")
    }

    pub(crate) fn area_settlement_memo(&self, area: &str) -> String {
        format!("پرداخت ناحیه {}", area)
    }

    /// Summary of an area settlement closed by an area change.
    pub(crate) fn area_settlement_summary(&self, area: &str) -> String {
        format!(
            "{} طی تنخواه {} {} پروژه {}",
            self.area_settlement_memo(area),
            self.config.petty_cash_number,
            self.config.payer_name,
            self.config.project_name
        )
    }

    /// Memo of a group settlement; `seed` is the chosen description, if any.
    pub(crate) fn group_settlement_memo(&self, seed: Option<&str>, count: usize) -> String {
        let seed = match seed {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => format!(
                "پرداخت جمعی {} فقره فاکتور طی تنخواه شماره {} {}",
                count, self.config.petty_cash_number, self.config.payer_name
            ),
        };
        format!("{} پروژه {}", seed, self.config.project_name)
    }

    fn run_clause(&self) -> String {
        format!(
            "طی تنخواه شماره {} {} پروژه {}",
            self.config.petty_cash_number, self.config.payer_name, self.config.project_name
        )
    }
}
