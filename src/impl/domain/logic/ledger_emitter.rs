use std::collections::BTreeMap;

use crate::{
    entities::{AccountCode, CellValue, Column, LedgerSheet, RunConfig},
    ext::{
        standard_accounts::{
            supply_kind, BANK_FEES, DOMESTIC_MARKER, INVENTORY_RECEIPT, PETTY_CASH_SETTLEMENT,
            PURCHASE_MARKER, REPORTING_CODE, TAX_STATUS_EXEMPT, TAX_STATUS_SUBJECT,
            VAT_RECEIVABLE,
        },
        standard_payers::settlement_level4,
    },
};

use super::{
    account_resolver::ResolvedAccount,
    batch_state::{Closure, Settlement, Totals},
    description_composer::DescriptionComposer,
};

/// Everything the emitter needs about one record.
#[derive(Debug)]
pub(crate) struct EmittableRecord {
    pub account: ResolvedAccount,
    pub memo: String,
    pub amounts: Totals,
    pub turnover: bool,
}

/// Sparse row under construction. Blank values leave the cell unset.
#[derive(Default)]
struct RowCells(BTreeMap<Column, CellValue>);

impl RowCells {
    fn text(mut self, column: Column, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.0.insert(column, CellValue::Text(value));
        }
        self
    }

    fn code(mut self, column: Column, code: AccountCode) -> Self {
        self.0.insert(column, CellValue::Code(code.code()));
        self
    }

    fn amount(mut self, column: Column, amount: f64) -> Self {
        self.0.insert(column, CellValue::Amount(amount));
        self
    }

    fn amount_if_nonzero(self, column: Column, amount: f64) -> Self {
        if amount != 0.0 {
            self.amount(column, amount)
        } else {
            self
        }
    }
}

/// Materializes ledger rows. Stateless apart from run-wide constants.
pub(crate) struct LedgerEmitter<'c> {
    config: &'c RunConfig,
    composer: DescriptionComposer<'c>,
    summary: String,
    settlement_level4: &'static str,
}

impl<'c> LedgerEmitter<'c> {
    pub(crate) fn new(config: &'c RunConfig) -> Self {
        let composer = DescriptionComposer::new(config);
        let summary = composer.summary();
        Self {
            config,
            composer,
            summary,
            settlement_level4: settlement_level4(config.payer()).unwrap_or_default(),
        }
    }

    /// Expense row, then the VAT and bank-fee rows when those amounts are
    /// positive.
    pub(crate) fn emit_expense_rows(&self, sheet: &mut LedgerSheet, record: &EmittableRecord) {
        let account = &record.account;
        let expense = self
            .dated()
            .code(Column::H, account.code)
            .text(Column::K, record.memo.as_str())
            .amount_if_nonzero(Column::P, record.amounts.principal)
            .text(Column::X, account.level4.as_str())
            .text(Column::Y, account.level5.as_str());
        sheet.append(self.with_vat_attributes(expense, record).0);

        if record.amounts.tax > 0.0 {
            let vat = self
                .dated()
                .code(Column::H, VAT_RECEIVABLE)
                .text(Column::K, self.composer.vat_memo())
                .amount(Column::P, record.amounts.tax)
                .text(Column::X, account.level4.as_str())
                .text(Column::Y, account.level5.as_str());
            sheet.append(vat.0);
        }

        if record.amounts.fee > 0.0 {
            let fee = self
                .dated()
                .code(Column::H, BANK_FEES)
                .text(Column::K, self.composer.bank_fee_memo())
                .amount(Column::P, record.amounts.fee)
                .text(Column::X, account.fee_level4.as_str())
                .text(Column::Y, account.level5.as_str());
            sheet.append(fee.0);
        }
    }

    /// Settlement of a single record, described like its expense row.
    pub(crate) fn emit_record_settlement(&self, sheet: &mut LedgerSheet, record: &EmittableRecord) {
        let cells = self.settlement_cells(record.memo.as_str(), record.amounts.total());
        sheet.append(cells.0);
    }

    /// Internal transfer: the principal is debited and credited on two rows.
    pub(crate) fn emit_turnover(&self, sheet: &mut LedgerSheet, record: &EmittableRecord) {
        for column in [Column::P, Column::Q] {
            let row = self
                .dated()
                .code(Column::H, INVENTORY_RECEIPT)
                .text(Column::K, record.memo.as_str())
                .amount(column, record.amounts.principal)
                .text(Column::Y, record.account.level5.as_str());
            sheet.append(row.0);
        }
    }

    /// One settlement row for a closed batch.
    pub(crate) fn emit_batch_settlement(&self, sheet: &mut LedgerSheet, settlement: &Settlement) {
        let amount = settlement.amount();
        let cells = match settlement {
            Settlement::Area { label, closure, .. } => {
                let cells =
                    self.settlement_cells(self.composer.area_settlement_memo(label), amount);
                match closure {
                    Closure::MidRun => {
                        cells.text(Column::D, self.composer.area_settlement_summary(label))
                    }
                    Closure::EndOfInput => cells,
                }
            }
            Settlement::Group { seed, count, .. } => self.settlement_cells(
                self.composer.group_settlement_memo(seed.as_deref(), *count),
                amount,
            ),
        };
        sheet.append(cells.0);
    }

    fn dated(&self) -> RowCells {
        RowCells::default()
            .text(Column::C, self.config.entry_date.as_str())
            .text(Column::D, self.summary.as_str())
    }

    fn settlement_cells(&self, memo: impl Into<String>, amount: f64) -> RowCells {
        self.dated()
            .code(Column::H, PETTY_CASH_SETTLEMENT)
            .text(Column::K, memo)
            .amount(Column::Q, amount)
            .text(Column::X, self.settlement_level4)
    }

    /// VAT-reporting block. Status, goods/service tag and amounts are only
    /// filled for a positive principal.
    fn with_vat_attributes(&self, cells: RowCells, record: &EmittableRecord) -> RowCells {
        let code = record.account.code;
        if code == PETTY_CASH_SETTLEMENT {
            return cells;
        }
        let cells = cells
            .text(Column::AP, DOMESTIC_MARKER)
            .text(Column::AR, PURCHASE_MARKER)
            .text(Column::AS, REPORTING_CODE);
        if record.amounts.principal <= 0.0 {
            return cells;
        }
        let cells = cells.text(
            Column::AQ,
            supply_kind(code).map(|k| k.label()).unwrap_or_default(),
        );
        if record.amounts.tax > 0.0 {
            cells
                .text(Column::AO, TAX_STATUS_SUBJECT)
                .amount(Column::AT, record.amounts.tax)
                .amount(Column::AU, 0.0)
        } else {
            cells.text(Column::AO, TAX_STATUS_EXEMPT)
        }
    }
}
