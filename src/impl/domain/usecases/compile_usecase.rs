use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::expenses_repository_impl::ExpensesRepositoryImpl,
    domain::{
        logic::ledger_compiler::LedgerCompiler,
        repositories::expenses_repository::ExpensesRepository,
    },
    entities::{ExpenseRecord, LedgerSheet, RunConfig},
};

#[async_trait]
pub trait CompileUsecase: Send + Sync {
    fn compile(
        &self,
        config: &RunConfig,
        records: &[ExpenseRecord],
    ) -> Result<LedgerSheet, ServerError>;

    async fn from_string(
        &self,
        config_ron: &str,
        expenses_csv: &str,
    ) -> Result<LedgerSheet, ServerError>;

    async fn from_file<P>(&self, config_ron: P, expenses_csv: P) -> Result<LedgerSheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct CompileUsecaseImpl<
    R1 = ExpensesRepositoryImpl, // Default.
> where
    R1: ExpensesRepository,
{
    expenses_repository: R1,
}

#[async_trait]
impl<R1> CompileUsecase for CompileUsecaseImpl<R1>
where
    R1: ExpensesRepository,
{
    fn compile(
        &self,
        config: &RunConfig,
        records: &[ExpenseRecord],
    ) -> Result<LedgerSheet, ServerError> {
        config.validate()?;
        Ok(LedgerCompiler::new(config).compile(records))
    }

    async fn from_string(
        &self,
        config_ron: &str,
        expenses_csv: &str,
    ) -> Result<LedgerSheet, ServerError> {
        let (config, records) = self
            .expenses_repository
            .from_string(config_ron, expenses_csv)?;
        self.compile(&config, &records)
    }

    async fn from_file<P>(&self, config_ron: P, expenses_csv: P) -> Result<LedgerSheet, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let (config, records) = self
            .expenses_repository
            .from_file(config_ron, expenses_csv)
            .await?;
        self.compile(&config, &records)
    }
}

impl CompileUsecaseImpl {
    pub(crate) fn new() -> Self {
        CompileUsecaseImpl {
            expenses_repository: ExpensesRepositoryImpl::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"RunConfig(
        petty_cash_number: "7",
        payer_name: "اقای حقی",
        entry_date: "1403/03/12",
        project_name: "مهر",
        default_level4: "21",
        default_level5: "4001",
    )"#;

    #[tokio::test]
    async fn compiles_from_strings() {
        let csv = "شرح سند,مبلغ\nخرید خودکار,100\n";
        let sheet = CompileUsecaseImpl::new().from_string(CONFIG, csv).await.unwrap();
        assert_eq!(sheet.len(), 2);
    }

    #[tokio::test]
    async fn blank_config_field_fails_the_run() {
        let config = CONFIG.replace("\"1403/03/12\"", "\"  \"");
        let csv = "شرح سند,مبلغ\nخرید خودکار,100\n";
        let result = CompileUsecaseImpl::new().from_string(&config, csv).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let result = CompileUsecaseImpl::new()
            .from_file("/nonexistent/run.ron", "/nonexistent/expenses.csv")
            .await;
        assert!(result.is_err());
    }
}
