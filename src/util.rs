use fractic_server_error::ServerError;

use crate::{
    domain::usecases::compile_usecase::{CompileUsecase as _, CompileUsecaseImpl},
    entities::{ExpenseRecord, LedgerSheet, RunConfig},
    presentation::{journal_printer::JournalPrinter, ledger_sheet_writer::LedgerSheetWriter},
};

pub struct PettyCashLedgerUtil {
    compile_usecase: CompileUsecaseImpl,
    writer: LedgerSheetWriter,
    printer: JournalPrinter,
}

impl PettyCashLedgerUtil {
    pub fn new() -> Self {
        Self {
            compile_usecase: CompileUsecaseImpl::new(),
            writer: LedgerSheetWriter::new(),
            printer: JournalPrinter::new(),
        }
    }

    /// Compile already-loaded records. Fails only if the run configuration is
    /// incomplete; bad cell values never abort a run.
    pub fn compile(
        &self,
        config: &RunConfig,
        records: &[ExpenseRecord],
    ) -> Result<LedgerSheet, ServerError> {
        self.compile_usecase.compile(config, records)
    }

    pub async fn from_string(
        &self,
        config_ron: &str,
        expenses_csv: &str,
    ) -> Result<LedgerSheet, ServerError> {
        self.compile_usecase
            .from_string(config_ron, expenses_csv)
            .await
    }

    pub async fn from_file<T>(
        &self,
        config_ron: T,
        expenses_csv: T,
    ) -> Result<LedgerSheet, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.compile_usecase
            .from_file(config_ron, expenses_csv)
            .await
    }

    /// Rows in the template's column layout, with a header line.
    pub fn to_csv(&self, sheet: &LedgerSheet) -> Result<String, ServerError> {
        self.writer.to_csv(sheet)
    }

    pub fn to_json(&self, sheet: &LedgerSheet) -> Result<String, ServerError> {
        self.writer.to_json(sheet)
    }

    pub fn preview(&self, sheet: &LedgerSheet) -> String {
        self.printer.print(sheet)
    }
}

impl Default for PettyCashLedgerUtil {
    fn default() -> Self {
        Self::new()
    }
}
