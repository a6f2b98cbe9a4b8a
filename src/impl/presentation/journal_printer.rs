use std::collections::BTreeMap;

use crate::entities::{Column, LedgerRow, LedgerSheet};

use super::utils::format_amount;

const WRAP_WIDTH: usize = 74;

/// Plain-text preview of a compiled sheet, for eyeballing a run before the
/// rows are pasted into the accounting template.
pub(crate) struct JournalPrinter;

impl JournalPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print(&self, sheet: &LedgerSheet) -> String {
        let mut output = String::new();

        output.push_str(
            "; --- Accounts -----------------------------------------------------------------\n\n",
        );
        self.print_accounts(&mut output, sheet);
        output.push_str("\n\n");

        output.push_str(
            "; --- Rows ---------------------------------------------------------------------\n\n",
        );
        self.print_rows(&mut output, sheet);
        output.push('\n');

        output.push_str(
            "; --- Totals -------------------------------------------------------------------\n\n",
        );
        self.print_totals(&mut output, sheet);

        output
    }

    fn print_accounts(&self, output: &mut String, sheet: &LedgerSheet) {
        // Net movement per account code: debit minus credit.
        let mut balances: BTreeMap<u32, f64> = BTreeMap::new();
        for row in sheet.rows() {
            if let Some(code) = row.account() {
                *balances.entry(code).or_default() +=
                    row.debit().unwrap_or(0.0) - row.credit().unwrap_or(0.0);
            }
        }
        for (code, balance) in balances {
            output.push_str(&format!("account {:<8} {:>20}\n", code, format_amount(balance)));
        }
    }

    fn print_rows(&self, output: &mut String, sheet: &LedgerSheet) {
        for row in sheet.rows() {
            output.push_str(&format!(
                "{:>4}  {:<6} {:>18} {:>18}  {}\n",
                row.row,
                row.account().map(|c| c.to_string()).unwrap_or_default(),
                row.debit().map(format_amount).unwrap_or_default(),
                row.credit().map(format_amount).unwrap_or_default(),
                self.segments(row),
            ));
            let prefix = "      ;";
            if let Some(description) = row.description() {
                for line in textwrap::wrap(description, WRAP_WIDTH) {
                    output.push_str(&format!("{} {}\n", prefix, line));
                }
            }
            if let Some(attributes) = self.vat_attributes(row) {
                output.push_str(&format!("{} [{}]\n", prefix, attributes));
            }
        }
    }

    fn print_totals(&self, output: &mut String, sheet: &LedgerSheet) {
        let debit: f64 = sheet.rows().iter().filter_map(LedgerRow::debit).sum();
        let credit: f64 = sheet.rows().iter().filter_map(LedgerRow::credit).sum();
        output.push_str(&format!("rows   {:>20}\n", sheet.len()));
        output.push_str(&format!("debit  {:>20}\n", format_amount(debit)));
        output.push_str(&format!("credit {:>20}\n", format_amount(credit)));
    }

    fn segments(&self, row: &LedgerRow) -> String {
        let text = |column| row.get(column).map(|v| v.to_string()).unwrap_or_default();
        match (text(Column::X), text(Column::Y)) {
            (x, y) if x.is_empty() && y.is_empty() => String::new(),
            (x, y) => format!("{}/{}", x, y),
        }
    }

    fn vat_attributes(&self, row: &LedgerRow) -> Option<String> {
        let attributes: Vec<String> = [Column::AO, Column::AP, Column::AQ, Column::AR, Column::AS]
            .into_iter()
            .filter_map(|column| row.get(column).map(|v| v.to_string()))
            .chain(
                [Column::AT, Column::AU].into_iter().filter_map(|column| {
                    row.get(column)
                        .and_then(|v| v.as_amount())
                        .map(|a| format!("{} {}", column.letter(), format_amount(a)))
                }),
            )
            .collect();
        (!attributes.is_empty()).then(|| attributes.join(" | "))
    }
}
