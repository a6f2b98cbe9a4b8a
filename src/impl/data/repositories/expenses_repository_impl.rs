use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        expenses_csv_datasource::{ExpensesCsvDatasource, ExpensesCsvDatasourceImpl},
        run_config_ron_datasource::{RunConfigRonDatasource, RunConfigRonDatasourceImpl},
    },
    domain::repositories::expenses_repository::ExpensesRepository,
    entities::{ExpenseRecord, RunConfig},
    errors::ReadError,
};

pub(crate) struct ExpensesRepositoryImpl<
    DS1 = RunConfigRonDatasourceImpl, // Default.
    DS2 = ExpensesCsvDatasourceImpl,  // Default.
> where
    DS1: RunConfigRonDatasource,
    DS2: ExpensesCsvDatasource,
{
    config_datasource: DS1,
    expenses_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> ExpensesRepository for ExpensesRepositoryImpl<DS1, DS2>
where
    DS1: RunConfigRonDatasource + Send + Sync,
    DS2: ExpensesCsvDatasource + Send + Sync,
{
    fn from_string(
        &self,
        config_ron: &str,
        expenses_csv: &str,
    ) -> Result<(RunConfig, Vec<ExpenseRecord>), ServerError> {
        let config = self.config_datasource.from_string(config_ron)?;
        let records = self.expenses_datasource.from_string(expenses_csv)?;
        tracing::debug!(records = records.len(), "loaded expense sheet");
        Ok((config, records))
    }

    async fn from_file<P>(
        &self,
        config_ron: P,
        expenses_csv: P,
    ) -> Result<(RunConfig, Vec<ExpenseRecord>), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let config_ron = tokio::fs::read_to_string(config_ron)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        let expenses_csv = tokio::fs::read_to_string(expenses_csv)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&config_ron, &expenses_csv)
    }
}

impl ExpensesRepositoryImpl {
    pub(crate) fn new() -> Self {
        ExpensesRepositoryImpl {
            config_datasource: RunConfigRonDatasourceImpl::new(),
            expenses_datasource: ExpensesCsvDatasourceImpl::new(),
        }
    }
}
