use fractic_server_error::ServerError;

use crate::{
    entities::{Column, LedgerSheet},
    errors::{InvalidJson, WriteError},
};

const ROW_HEADER: &str = "row";

/// Renders a compiled sheet in the accounting template's column layout.
pub(crate) struct LedgerSheetWriter;

impl LedgerSheetWriter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// One CSV line per ledger row, with a header line of template column
    /// letters. Unset cells are written empty.
    pub(crate) fn to_csv(&self, sheet: &LedgerSheet) -> Result<String, ServerError> {
        let mut buffer = Vec::new();
        let mut writer = csv::Writer::from_writer(&mut buffer);

        let header = std::iter::once(ROW_HEADER).chain(Column::ALL.iter().map(Column::letter));
        writer
            .write_record(header)
            .map_err(|e| WriteError::with_debug("CSV header", &e))?;
        for row in sheet.rows() {
            let cells = Column::ALL.iter().map(|column| {
                row.get(*column)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            });
            writer
                .write_record(std::iter::once(row.row.to_string()).chain(cells))
                .map_err(|e| WriteError::with_debug("CSV row", &e))?;
        }

        writer
            .flush()
            .map_err(|e| WriteError::with_debug("CSV output", &e))?;
        drop(writer);
        String::from_utf8(buffer).map_err(|e| WriteError::with_debug("CSV output", &e))
    }

    pub(crate) fn to_json(&self, sheet: &LedgerSheet) -> Result<String, ServerError> {
        serde_json::to_string_pretty(sheet).map_err(|e| InvalidJson::with_debug("LedgerSheet", &e))
    }
}
