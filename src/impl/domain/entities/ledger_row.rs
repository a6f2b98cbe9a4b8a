use std::collections::BTreeMap;

/// Template columns the compiler writes to. Variant names are the
/// spreadsheet column letters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde_derive::Serialize,
)]
pub enum Column {
    /// Entry date.
    C,
    /// Summary memo.
    D,
    /// Account code.
    H,
    /// Row description.
    K,
    /// Debit (principal) amount.
    P,
    /// Credit (settlement) amount.
    Q,
    /// Level-4 segment.
    X,
    /// Level-5 segment.
    Y,
    /// Taxable status.
    AO,
    /// Domestic / foreign marker.
    AP,
    /// Goods vs. service.
    AQ,
    /// Transaction type.
    AR,
    /// Reporting code.
    AS,
    /// Taxable amount.
    AT,
    /// Exempt amount.
    AU,
}

impl Column {
    pub const ALL: [Column; 15] = [
        Column::C,
        Column::D,
        Column::H,
        Column::K,
        Column::P,
        Column::Q,
        Column::X,
        Column::Y,
        Column::AO,
        Column::AP,
        Column::AQ,
        Column::AR,
        Column::AS,
        Column::AT,
        Column::AU,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            Column::C => "C",
            Column::D => "D",
            Column::H => "H",
            Column::K => "K",
            Column::P => "P",
            Column::Q => "Q",
            Column::X => "X",
            Column::Y => "Y",
            Column::AO => "AO",
            Column::AP => "AP",
            Column::AQ => "AQ",
            Column::AR => "AR",
            Column::AS => "AS",
            Column::AT => "AT",
            Column::AU => "AU",
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Code(u32),
    Amount(f64),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_code(&self) -> Option<u32> {
        match self {
            CellValue::Code(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_amount(&self) -> Option<f64> {
        match self {
            CellValue::Amount(a) => Some(*a),
            _ => None,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Code(c) => write!(f, "{}", c),
            CellValue::Amount(a) => write!(f, "{}", a),
        }
    }
}

/// A single output row. Columns that are not set render as blank cells.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct LedgerRow {
    pub row: u32,
    pub cells: BTreeMap<Column, CellValue>,
}

impl LedgerRow {
    pub fn get(&self, column: Column) -> Option<&CellValue> {
        self.cells.get(&column)
    }

    pub fn account(&self) -> Option<u32> {
        self.get(Column::H).and_then(CellValue::as_code)
    }

    pub fn description(&self) -> Option<&str> {
        self.get(Column::K).and_then(CellValue::as_text)
    }

    pub fn debit(&self) -> Option<f64> {
        self.get(Column::P).and_then(CellValue::as_amount)
    }

    pub fn credit(&self) -> Option<f64> {
        self.get(Column::Q).and_then(CellValue::as_amount)
    }
}

/// Row 1 of the template holds the headers.
pub const FIRST_DATA_ROW: u32 = 2;

/// Ordered output of one run. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Default, serde_derive::Serialize)]
#[serde(transparent)]
pub struct LedgerSheet {
    rows: Vec<LedgerRow>,
}

impl LedgerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose account is the given code, in sheet order.
    pub fn rows_with_account(&self, code: u32) -> impl Iterator<Item = &LedgerRow> {
        self.rows.iter().filter(move |r| r.account() == Some(code))
    }

    pub(crate) fn append(&mut self, cells: BTreeMap<Column, CellValue>) -> u32 {
        let row = FIRST_DATA_ROW + self.rows.len() as u32;
        self.rows.push(LedgerRow { row, cells });
        row
    }
}
