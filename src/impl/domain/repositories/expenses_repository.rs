use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{ExpenseRecord, RunConfig};

#[async_trait]
pub trait ExpensesRepository: Send + Sync {
    fn from_string(
        &self,
        config_ron: &str,
        expenses_csv: &str,
    ) -> Result<(RunConfig, Vec<ExpenseRecord>), ServerError>;

    async fn from_file<P>(
        &self,
        config_ron: P,
        expenses_csv: P,
    ) -> Result<(RunConfig, Vec<ExpenseRecord>), ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
