use crate::{
    data::models::integer_model::zfill,
    entities::{AccountCode, BookType, RunConfig},
    ext::{
        standard_accounts::{HEAD_OFFICE_LEVEL5, INVENTORY_RECEIPT, INVENTORY_RECEIPT_LEVEL4},
        standard_payers::{
            is_courier_payer, COST_CENTER_PROJECT, COST_CENTER_PROJECT_DEFAULT_LEVEL4,
        },
    },
};

use super::account_classifier::{classify, classify_hint};

const SEGMENT_WIDTH: usize = 6;

/// Account code and level segments of one record's expense side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedAccount {
    pub code: AccountCode,
    /// Level-4 segment of the expense and VAT rows.
    pub level4: String,
    /// Level-4 segment of the bank-fee row.
    pub fee_level4: String,
    pub level5: String,
}

/// Normalized record fields that drive account resolution.
#[derive(Debug, Default)]
pub(crate) struct AccountFields<'a> {
    pub description: &'a str,
    pub receipt_number: &'a str,
    /// Already zero-padded, or "".
    pub cost_center: &'a str,
    pub keyword_hint: &'a str,
}

pub(crate) struct AccountResolver<'c> {
    payer: &'c str,
    level4: String,
    level5: String,
    /// Set for the cost-center project only.
    fee_level4_override: Option<String>,
}

impl<'c> AccountResolver<'c> {
    pub(crate) fn new(config: &'c RunConfig) -> Self {
        let payer = config.payer();
        let level5 = if is_courier_payer(payer) {
            HEAD_OFFICE_LEVEL5.to_string()
        } else {
            zfill(config.default_level5.trim(), SEGMENT_WIDTH)
        };
        let fee_level4_override = (config.project() == COST_CENTER_PROJECT).then(|| {
            match config.fee_level4_override.as_deref().map(str::trim) {
                Some(s) if !s.is_empty() => zfill(s, SEGMENT_WIDTH),
                _ => COST_CENTER_PROJECT_DEFAULT_LEVEL4.to_string(),
            }
        });
        Self {
            payer,
            level4: zfill(config.default_level4.trim(), SEGMENT_WIDTH),
            level5,
            fee_level4_override,
        }
    }

    pub(crate) fn book_type(&self) -> BookType {
        if self.level5 == HEAD_OFFICE_LEVEL5 {
            BookType::HeadOffice
        } else {
            BookType::Project
        }
    }

    /// Precedence: warehouse receipt, then keyword hint, then the description
    /// classifier.
    pub(crate) fn resolve(&self, fields: &AccountFields) -> ResolvedAccount {
        let (mut level4, fee_level4) = match &self.fee_level4_override {
            Some(fee_level4) => {
                let level4 = if fields.cost_center.is_empty() {
                    COST_CENTER_PROJECT_DEFAULT_LEVEL4.to_string()
                } else {
                    fields.cost_center.to_string()
                };
                (level4, fee_level4.clone())
            }
            None => (self.level4.clone(), self.level4.clone()),
        };

        let code = if !fields.receipt_number.is_empty() {
            level4 = INVENTORY_RECEIPT_LEVEL4.to_string();
            INVENTORY_RECEIPT
        } else if let Some(code) = classify_hint(fields.keyword_hint) {
            code
        } else {
            classify(fields.description, self.book_type(), self.payer)
        };

        ResolvedAccount {
            code,
            level4,
            fee_level4,
            level5: self.level5.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(payer: &str, project: &str, fee_override: Option<&str>) -> RunConfig {
        RunConfig {
            petty_cash_number: "7".into(),
            payer_name: payer.into(),
            entry_date: "1403/03/12".into(),
            project_name: project.into(),
            default_level4: "21".into(),
            default_level5: "4001".into(),
            fee_level4_override: fee_override.map(Into::into),
        }
    }

    #[test]
    fn defaults_are_zero_padded() {
        let config = config("اقای حقی", "مهر", Some("999"));
        let resolver = AccountResolver::new(&config);
        let resolved = resolver.resolve(&AccountFields {
            description: "اجاره",
            ..Default::default()
        });
        assert_eq!(
            resolved,
            ResolvedAccount {
                code: AccountCode(7341),
                level4: "000021".into(),
                fee_level4: "000021".into(),
                level5: "004001".into(),
            }
        );
        assert_eq!(resolver.book_type(), BookType::Project);
    }

    #[test]
    fn couriers_book_to_head_office() {
        let config = config("خانم زابلی", "مهر", None);
        let resolver = AccountResolver::new(&config);
        assert_eq!(resolver.book_type(), BookType::HeadOffice);
        let resolved = resolver.resolve(&AccountFields {
            description: "اوردن نامه",
            ..Default::default()
        });
        assert_eq!(resolved.code, AccountCode(7216));
        assert_eq!(resolved.level5, "006003");
    }

    #[test]
    fn head_office_level5_selects_head_office_book() {
        let mut config = config("اقای حقی", "مهر", None);
        config.default_level5 = "6003".into();
        assert_eq!(AccountResolver::new(&config).book_type(), BookType::HeadOffice);
    }

    #[test]
    fn receipt_forces_inventory_account() {
        let config = config("اقای حقی", "مهر", None);
        let resolver = AccountResolver::new(&config);
        let resolved = resolver.resolve(&AccountFields {
            description: "حمل و اجاره",
            receipt_number: "120",
            keyword_hint: "سوخت",
            ..Default::default()
        });
        assert_eq!(resolved.code, AccountCode(3120));
        assert_eq!(resolved.level4, "200082");
        assert_eq!(resolved.fee_level4, "000021");
    }

    #[test]
    fn hint_overrides_description() {
        let config = config("اقای حقی", "مهر", None);
        let resolver = AccountResolver::new(&config);
        let resolved = resolver.resolve(&AccountFields {
            description: "اجاره",
            keyword_hint: "سوخت",
            ..Default::default()
        });
        assert_eq!(resolved.code, AccountCode(7252));
    }

    #[test]
    fn cost_center_project_takes_level4_from_record() {
        let config = config("اقای حقی", " پرند ", Some("77"));
        let resolver = AccountResolver::new(&config);

        let resolved = resolver.resolve(&AccountFields {
            cost_center: "000345",
            ..Default::default()
        });
        assert_eq!(resolved.level4, "000345");
        assert_eq!(resolved.fee_level4, "000077");

        let resolved = resolver.resolve(&AccountFields::default());
        assert_eq!(resolved.level4, "005021");
    }

    #[test]
    fn cost_center_project_fee_defaults_without_override() {
        let config = config("اقای حقی", "پرند", Some("  "));
        let resolved = AccountResolver::new(&config).resolve(&AccountFields::default());
        assert_eq!(resolved.fee_level4, "005021");
    }
}
