use fractic_server_error::ServerError;
use ron::from_str;

use crate::{entities::RunConfig, errors::InvalidRon};

pub(crate) trait RunConfigRonDatasource {
    fn from_string(&self, s: &str) -> Result<RunConfig, ServerError>;
}

pub(crate) struct RunConfigRonDatasourceImpl;

impl RunConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RunConfigRonDatasource for RunConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<RunConfig, ServerError> {
        from_str(s).map_err(|e| InvalidRon::with_debug("RunConfig", &e))
    }
}
