use fractic_server_error::ServerError;

use crate::errors::MissingConfigField;

/// Operator inputs, constant for a whole conversion run.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
pub struct RunConfig {
    /// Petty-cash (tanakh) number.
    pub petty_cash_number: String,
    /// Custodian display name, also used as the payer identity.
    pub payer_name: String,
    /// Entry date, free text (ex. "1403/03/12").
    pub entry_date: String,
    pub project_name: String,
    pub default_level4: String,
    pub default_level5: String,
    /// Only consulted for the cost-center project.
    #[serde(default)]
    pub fee_level4_override: Option<String>,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ServerError> {
        let required = [
            ("petty_cash_number", &self.petty_cash_number),
            ("payer_name", &self.payer_name),
            ("entry_date", &self.entry_date),
            ("project_name", &self.project_name),
            ("default_level4", &self.default_level4),
            ("default_level5", &self.default_level5),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(MissingConfigField::new(field));
            }
        }
        Ok(())
    }

    pub(crate) fn payer(&self) -> &str {
        self.payer_name.trim()
    }

    pub(crate) fn project(&self) -> &str {
        self.project_name.trim()
    }
}
