use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::fuel_tax_repository_impl::FuelTaxRepositoryImpl,
    domain::{logic::pipeline::build_report, repositories::fuel_tax_repository::FuelTaxRepository},
    entities::{FuelTaxReport, FuelTaxReportSpec, RateTable, ReportHeader},
};

#[async_trait]
pub trait ApportionUsecase: Send + Sync {
    fn compute(
        &self,
        spec: &FuelTaxReportSpec,
        rates: &RateTable,
    ) -> Result<FuelTaxReport, ServerError>;

    async fn from_string(
        &self,
        header: ReportHeader,
        trip_ledger_csv: &str,
        rates: &RateTable,
    ) -> Result<FuelTaxReport, ServerError>;

    async fn from_file<P>(
        &self,
        header: ReportHeader,
        trip_ledger_csv: P,
        rates: &RateTable,
    ) -> Result<FuelTaxReport, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn rates_from_string(&self, rate_schedule_ron: &str) -> Result<RateTable, ServerError>;

    async fn rates_from_file<P>(&self, rate_schedule_ron: P) -> Result<RateTable, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ApportionUsecaseImpl<
    R1 = FuelTaxRepositoryImpl, // Default.
> where
    R1: FuelTaxRepository,
{
    repository: R1,
}

#[async_trait]
impl<R1> ApportionUsecase for ApportionUsecaseImpl<R1>
where
    R1: FuelTaxRepository,
{
    fn compute(
        &self,
        spec: &FuelTaxReportSpec,
        rates: &RateTable,
    ) -> Result<FuelTaxReport, ServerError> {
        Ok(build_report(spec, rates)?)
    }

    async fn from_string(
        &self,
        header: ReportHeader,
        trip_ledger_csv: &str,
        rates: &RateTable,
    ) -> Result<FuelTaxReport, ServerError> {
        let entries = self.repository.trip_ledger_from_string(trip_ledger_csv)?;
        self.compute(&header.with_entries(entries), rates)
    }

    async fn from_file<P>(
        &self,
        header: ReportHeader,
        trip_ledger_csv: P,
        rates: &RateTable,
    ) -> Result<FuelTaxReport, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let entries = self
            .repository
            .trip_ledger_from_file(trip_ledger_csv)
            .await?;
        self.compute(&header.with_entries(entries), rates)
    }

    fn rates_from_string(&self, rate_schedule_ron: &str) -> Result<RateTable, ServerError> {
        self.repository.rate_table_from_string(rate_schedule_ron)
    }

    async fn rates_from_file<P>(&self, rate_schedule_ron: P) -> Result<RateTable, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.repository.rate_table_from_file(rate_schedule_ron).await
    }
}

impl ApportionUsecaseImpl {
    pub(crate) fn new() -> Self {
        ApportionUsecaseImpl {
            repository: FuelTaxRepositoryImpl::new(),
        }
    }
}
