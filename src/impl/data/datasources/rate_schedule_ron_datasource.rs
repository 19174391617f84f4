use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::rate_schedule_model::RateScheduleModel,
    entities::RateTable,
    errors::{InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait RateScheduleRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<RateTable, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<RateTable, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct RateScheduleRonDatasourceImpl;

impl RateScheduleRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RateScheduleRonDatasource for RateScheduleRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<RateTable, ServerError> {
        let model: RateScheduleModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("RateSchedule", &e))?;
        model.try_into()
    }

    async fn from_file<P>(&self, path: P) -> Result<RateTable, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}
