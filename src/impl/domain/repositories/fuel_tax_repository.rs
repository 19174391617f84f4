use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{RateTable, TripEntry};

#[async_trait]
pub trait FuelTaxRepository: Send + Sync {
    fn trip_ledger_from_string(&self, trip_ledger_csv: &str) -> Result<Vec<TripEntry>, ServerError>;

    async fn trip_ledger_from_file<P>(
        &self,
        trip_ledger_csv: P,
    ) -> Result<Vec<TripEntry>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn rate_table_from_string(&self, rate_schedule_ron: &str) -> Result<RateTable, ServerError>;

    async fn rate_table_from_file<P>(
        &self,
        rate_schedule_ron: P,
    ) -> Result<RateTable, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
