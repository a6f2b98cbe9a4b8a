/// One row of the uploaded petty-cash sheet, as raw cell text.
///
/// `None` means the column is absent from the sheet or the cell is blank.
/// Values are normalized later, during compilation, so that coercion failures
/// never abort a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub area: Option<String>,
    pub description: Option<String>,
    pub seller: Option<String>,
    /// May encode a range, ex. "2532-2534".
    pub invoice_number: Option<String>,
    pub receipt_number: Option<String>,
    pub cost_date: Option<String>,
    pub fee: Option<String>,
    pub tax: Option<String>,
    pub principal: Option<String>,
    pub turnover: Option<String>,
    pub group_payment: Option<String>,
    pub cost_center: Option<String>,
    pub keyword_hint: Option<String>,
}

// Sheet column headers.
// ---

pub(crate) const AREA_HEADER: &str = "ناحیه";
pub(crate) const DESCRIPTION_HEADER: &str = "شرح سند";
pub(crate) const SELLER_HEADER: &str = "نام فروشنده / فروشگاه";
pub(crate) const INVOICE_HEADER: &str = "شماره فاکتور";
pub(crate) const RECEIPT_HEADER: &str = "رسیدانبار";
pub(crate) const DATE_HEADER: &str = "تاریخ";
pub(crate) const FEE_HEADER: &str = "کارمزد";
pub(crate) const TAX_HEADER: &str = "ارزش افزوده";
pub(crate) const PRINCIPAL_HEADER: &str = "مبلغ";
pub(crate) const TURNOVER_HEADER: &str = "گردش";
/// Either spelling may be used; the first one present wins.
pub(crate) const GROUP_PAYMENT_HEADERS: [&str; 2] = ["پرداخت جمعی", "پرداخت گروهی"];
pub(crate) const COST_CENTER_HEADER: &str = "مرکز هزینه";
pub(crate) const KEYWORD_HINT_HEADER: &str = "کلیدواژه";

/// Cell value that marks a record as an internal turnover.
pub(crate) const TURNOVER_MARKER: &str = "گردش";
