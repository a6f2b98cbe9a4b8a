use std::str::FromStr;

use super::text_model::is_placeholder;

/// Monetary cell value. Parsing never fails: blanks, placeholders and
/// unparseable text all read as zero, so that a bad cell cannot abort a run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct AmountModel(pub f64);

impl FromStr for AmountModel {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if is_placeholder(raw) {
            return Ok(AmountModel(0.0));
        }
        let amount = raw
            .replace(",", "")
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .unwrap_or(0.0);
        Ok(AmountModel(amount))
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}

pub(crate) fn normalize_amount(value: Option<&str>) -> f64 {
    value
        .map(|v| AmountModel::from_str(v).unwrap_or_default().into())
        .unwrap_or(0.0)
}
