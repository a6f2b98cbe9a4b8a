use crate::{
    data::models::{
        amount_model::normalize_amount,
        flag_model::{is_group_flag, is_turnover},
        integer_model::{normalize_cost_center, normalize_integer},
        text_model::clean_text,
    },
    entities::{ExpenseRecord, LedgerSheet, RunConfig},
};

use super::{
    account_resolver::{AccountFields, AccountResolver},
    batch_state::{BatchSignal, BatchState, Disposition, Totals},
    description_composer::{DescriptionComposer, MemoParts},
    ledger_emitter::{EmittableRecord, LedgerEmitter},
};

/// Compiles one run: records in, ledger rows out.
pub(crate) struct LedgerCompiler<'c> {
    config: &'c RunConfig,
    resolver: AccountResolver<'c>,
    composer: DescriptionComposer<'c>,
    emitter: LedgerEmitter<'c>,
}

struct FoldState {
    sheet: LedgerSheet,
    batch: BatchState,
}

/// A record after field normalization.
struct NormalizedRecord {
    area: String,
    description: String,
    seller: String,
    invoice_number: String,
    receipt_number: String,
    cost_date: String,
    amounts: Totals,
    turnover: bool,
    grouped: bool,
    cost_center: String,
    keyword_hint: String,
}

impl NormalizedRecord {
    fn from_raw(record: &ExpenseRecord) -> Self {
        let raw = |field: &Option<String>| field.as_deref().unwrap_or("").to_string();
        Self {
            area: clean_text(record.area.as_deref()),
            description: clean_text(record.description.as_deref()),
            seller: clean_text(record.seller.as_deref()),
            invoice_number: normalize_integer(&raw(&record.invoice_number)),
            receipt_number: normalize_integer(&raw(&record.receipt_number)),
            cost_date: clean_text(record.cost_date.as_deref()),
            amounts: Totals {
                principal: normalize_amount(record.principal.as_deref()),
                fee: normalize_amount(record.fee.as_deref()),
                tax: normalize_amount(record.tax.as_deref()),
            },
            turnover: is_turnover(record.turnover.as_deref()),
            grouped: is_group_flag(record.group_payment.as_deref()),
            cost_center: normalize_cost_center(&raw(&record.cost_center)),
            keyword_hint: clean_text(record.keyword_hint.as_deref()),
        }
    }
}

impl<'c> LedgerCompiler<'c> {
    pub(crate) fn new(config: &'c RunConfig) -> Self {
        Self {
            config,
            resolver: AccountResolver::new(config),
            composer: DescriptionComposer::new(config),
            emitter: LedgerEmitter::new(config),
        }
    }

    pub(crate) fn compile<'r, I>(&self, records: I) -> LedgerSheet
    where
        I: IntoIterator<Item = &'r ExpenseRecord>,
    {
        let initial = FoldState {
            sheet: LedgerSheet::new(),
            batch: BatchState::for_payer(self.config.payer()),
        };
        tracing::debug!(area_mode = initial.batch.is_area_mode(), "starting run");
        let FoldState { mut sheet, batch } = records
            .into_iter()
            .fold(initial, |state, record| self.step(state, record));

        // Every batch still open is closed exactly once, here.
        if let Some(settlement) = batch.finish() {
            self.emitter.emit_batch_settlement(&mut sheet, &settlement);
        }
        tracing::info!(rows = sheet.len(), payer = %self.config.payer(), "compiled ledger");
        sheet
    }

    fn step(&self, mut state: FoldState, raw: &ExpenseRecord) -> FoldState {
        let record = NormalizedRecord::from_raw(raw);

        let batch_step = state.batch.step(&BatchSignal {
            area: Some(record.area.as_str()),
            grouped: record.grouped,
            description: &record.description,
            amounts: record.amounts,
        });
        if let Some(settlement) = &batch_step.flushed {
            self.emitter.emit_batch_settlement(&mut state.sheet, settlement);
        }
        if batch_step.disposition == Disposition::Skipped {
            tracing::debug!("skipping zero-amount group closing record");
            return state;
        }

        let account = self.resolver.resolve(&AccountFields {
            description: &record.description,
            receipt_number: &record.receipt_number,
            cost_center: &record.cost_center,
            keyword_hint: &record.keyword_hint,
        });
        let memo = self.composer.memo(&MemoParts {
            description: &record.description,
            receipt_number: &record.receipt_number,
            invoice_number: &record.invoice_number,
            seller: &record.seller,
            cost_date: &record.cost_date,
        });
        let emittable = EmittableRecord {
            account,
            memo,
            amounts: record.amounts,
            turnover: record.turnover,
        };
        tracing::debug!(
            account = %emittable.account.code,
            disposition = ?batch_step.disposition,
            "emitting record"
        );

        self.emitter.emit_expense_rows(&mut state.sheet, &emittable);
        if batch_step.disposition == Disposition::Standalone {
            self.emitter.emit_record_settlement(&mut state.sheet, &emittable);
        }
        if emittable.turnover {
            self.emitter.emit_turnover(&mut state.sheet, &emittable);
        }
        state
    }
}
