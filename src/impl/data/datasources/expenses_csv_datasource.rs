use fractic_server_error::ServerError;

use crate::{
    entities::{
        ExpenseRecord, AREA_HEADER, COST_CENTER_HEADER, DATE_HEADER, DESCRIPTION_HEADER,
        FEE_HEADER, GROUP_PAYMENT_HEADERS, INVOICE_HEADER, KEYWORD_HINT_HEADER, PRINCIPAL_HEADER,
        RECEIPT_HEADER, SELLER_HEADER, TAX_HEADER, TURNOVER_HEADER,
    },
    errors::InvalidCsv,
};

pub(crate) trait ExpensesCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<ExpenseRecord>, ServerError>;
}

pub(crate) struct ExpensesCsvDatasourceImpl;

impl ExpensesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

/// Position of each known column in the uploaded sheet, if present.
#[derive(Debug, Default)]
struct ColumnIndex {
    area: Option<usize>,
    description: Option<usize>,
    seller: Option<usize>,
    invoice_number: Option<usize>,
    receipt_number: Option<usize>,
    cost_date: Option<usize>,
    fee: Option<usize>,
    tax: Option<usize>,
    principal: Option<usize>,
    turnover: Option<usize>,
    group_payment: Option<usize>,
    cost_center: Option<usize>,
    keyword_hint: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();
        let find = |header: &str| {
            let position = names.iter().position(|name| *name == header);
            if position.is_none() {
                tracing::debug!(column = header, "column absent from sheet");
            }
            position
        };

        Self {
            area: find(AREA_HEADER),
            description: find(DESCRIPTION_HEADER),
            seller: find(SELLER_HEADER),
            invoice_number: find(INVOICE_HEADER),
            receipt_number: find(RECEIPT_HEADER),
            cost_date: find(DATE_HEADER),
            fee: find(FEE_HEADER),
            tax: find(TAX_HEADER),
            principal: find(PRINCIPAL_HEADER),
            turnover: find(TURNOVER_HEADER),
            group_payment: GROUP_PAYMENT_HEADERS
                .iter()
                .find_map(|header| names.iter().position(|name| name == header)),
            cost_center: find(COST_CENTER_HEADER),
            keyword_hint: find(KEYWORD_HINT_HEADER),
        }
    }
}

impl ExpensesCsvDatasource for ExpensesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<ExpenseRecord>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());
        let index = ColumnIndex::from_headers(
            reader.headers().map_err(|e| InvalidCsv::with_debug(&e))?,
        );
        if index.group_payment.is_none() {
            tracing::debug!("no group payment column, every record settles on its own");
        }

        reader
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).map(|r| {
                    // Blank cells and absent columns both read as None.
                    let cell = |i: Option<usize>| -> Option<String> {
                        i.and_then(|i| r.get(i))
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                    };

                    ExpenseRecord {
                        area: cell(index.area),
                        description: cell(index.description),
                        seller: cell(index.seller),
                        invoice_number: cell(index.invoice_number),
                        receipt_number: cell(index.receipt_number),
                        cost_date: cell(index.cost_date),
                        fee: cell(index.fee),
                        tax: cell(index.tax),
                        principal: cell(index.principal),
                        turnover: cell(index.turnover),
                        group_payment: cell(index.group_payment),
                        cost_center: cell(index.cost_center),
                        keyword_hint: cell(index.keyword_hint),
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cells_by_header_name() {
        let csv = "\u{feff}مبلغ, شرح سند ,ناحیه\n1200,خرید کاغذ,شمال\n";
        let records = ExpensesCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(
            records,
            vec![ExpenseRecord {
                area: Some("شمال".into()),
                description: Some("خرید کاغذ".into()),
                principal: Some("1200".into()),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn blank_cells_and_short_rows_are_none() {
        let csv = "شرح سند,مبلغ,کارمزد\n  ,500\n";
        let records = ExpensesCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(records[0].description, None);
        assert_eq!(records[0].principal.as_deref(), Some("500"));
        assert_eq!(records[0].fee, None);
    }

    #[test]
    fn first_group_header_wins() {
        let csv = "پرداخت گروهی,پرداخت جمعی\n0,1\n";
        let records = ExpensesCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(records[0].group_payment.as_deref(), Some("1"));

        let csv = "پرداخت گروهی\n1\n";
        let records = ExpensesCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(records[0].group_payment.as_deref(), Some("1"));
    }

    #[test]
    fn header_only_sheet_has_no_records() {
        let records = ExpensesCsvDatasourceImpl::new().from_string("مبلغ\n").unwrap();
        assert!(records.is_empty());
    }
}
