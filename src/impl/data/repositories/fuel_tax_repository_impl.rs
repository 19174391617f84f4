use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        rate_schedule_ron_datasource::{RateScheduleRonDatasource, RateScheduleRonDatasourceImpl},
        trip_ledger_csv_datasource::{TripLedgerCsvDatasource, TripLedgerCsvDatasourceImpl},
    },
    domain::repositories::fuel_tax_repository::FuelTaxRepository,
    entities::{RateTable, TripEntry},
};

pub(crate) struct FuelTaxRepositoryImpl<
    DS1 = TripLedgerCsvDatasourceImpl, // Default.
    DS2 = RateScheduleRonDatasourceImpl, // Default.
> where
    DS1: TripLedgerCsvDatasource,
    DS2: RateScheduleRonDatasource,
{
    trip_ledger_datasource: DS1,
    rate_schedule_datasource: DS2,
}

#[async_trait]
impl<DS1, DS2> FuelTaxRepository for FuelTaxRepositoryImpl<DS1, DS2>
where
    DS1: TripLedgerCsvDatasource,
    DS2: RateScheduleRonDatasource,
{
    fn trip_ledger_from_string(
        &self,
        trip_ledger_csv: &str,
    ) -> Result<Vec<TripEntry>, ServerError> {
        self.trip_ledger_datasource.from_string(trip_ledger_csv)
    }

    async fn trip_ledger_from_file<P>(
        &self,
        trip_ledger_csv: P,
    ) -> Result<Vec<TripEntry>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.trip_ledger_datasource.from_file(trip_ledger_csv).await
    }

    fn rate_table_from_string(&self, rate_schedule_ron: &str) -> Result<RateTable, ServerError> {
        self.rate_schedule_datasource.from_string(rate_schedule_ron)
    }

    async fn rate_table_from_file<P>(
        &self,
        rate_schedule_ron: P,
    ) -> Result<RateTable, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.rate_schedule_datasource.from_file(rate_schedule_ron).await
    }
}

impl FuelTaxRepositoryImpl {
    pub(crate) fn new() -> Self {
        FuelTaxRepositoryImpl {
            trip_ledger_datasource: TripLedgerCsvDatasourceImpl::new(),
            rate_schedule_datasource: RateScheduleRonDatasourceImpl::new(),
        }
    }
}
