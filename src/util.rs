use fractic_server_error::ServerError;

use crate::{
    domain::usecases::apportion_usecase::{ApportionUsecase as _, ApportionUsecaseImpl},
    entities::{FuelTaxReport, FuelTaxReportSpec, RateTable, ReportHeader},
    ext::standard_rates::STANDARD_RATES_2025_Q4,
    presentation::{
        csv_exporter::CsvExporter, json_exporter::JsonExporter, summary_printer::SummaryPrinter,
    },
};

pub type CsvExport = String;

/// Entry point: computes IFTA fuel tax reports against one rate table and
/// renders them.
pub struct IftaFuelTaxUtil {
    apportion_usecase: ApportionUsecaseImpl,
    rates: RateTable,
    csv_exporter: CsvExporter,
    json_exporter: JsonExporter,
    summary_printer: SummaryPrinter,
}

impl IftaFuelTaxUtil {
    /// Uses the built-in standard rate schedule.
    pub fn new() -> Self {
        Self::with_rates(STANDARD_RATES_2025_Q4.clone())
    }

    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            apportion_usecase: ApportionUsecaseImpl::new(),
            rates,
            csv_exporter: CsvExporter::new(),
            json_exporter: JsonExporter::new(),
            summary_printer: SummaryPrinter::new(),
        }
    }

    /// Uses a rate schedule given in RON, keyed by jurisdiction code:
    ///
    /// ```text
    /// RateSchedule(
    ///     effective: "2025-Q4",
    ///     diesel: { "TX": 0.200, "KY": 0.220 },
    ///     gasoline: { "TX": 0.200 },
    ///     diesel_surcharge: { "KY": 0.105 },
    /// )
    /// ```
    pub fn with_rate_schedule(rate_schedule_ron: &str) -> Result<Self, ServerError> {
        let rates = ApportionUsecaseImpl::new().rates_from_string(rate_schedule_ron)?;
        Ok(Self::with_rates(rates))
    }

    pub async fn with_rate_schedule_file<P>(rate_schedule_ron: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let rates = ApportionUsecaseImpl::new()
            .rates_from_file(rate_schedule_ron)
            .await?;
        Ok(Self::with_rates(rates))
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn compute(&self, spec: &FuelTaxReportSpec) -> Result<FuelTaxReport, ServerError> {
        self.apportion_usecase.compute(spec, &self.rates)
    }

    pub async fn from_string(
        &self,
        header: ReportHeader,
        trip_ledger_csv: &str,
    ) -> Result<(FuelTaxReport, CsvExport), ServerError> {
        let report = self
            .apportion_usecase
            .from_string(header, trip_ledger_csv, &self.rates)
            .await?;
        let csv = self.csv_exporter.export(&report)?;
        Ok((report, csv))
    }

    pub async fn from_file<P>(
        &self,
        header: ReportHeader,
        trip_ledger_csv: P,
    ) -> Result<(FuelTaxReport, CsvExport), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let report = self
            .apportion_usecase
            .from_file(header, trip_ledger_csv, &self.rates)
            .await?;
        let csv = self.csv_exporter.export(&report)?;
        Ok((report, csv))
    }

    pub fn export_csv(&self, report: &FuelTaxReport) -> Result<CsvExport, ServerError> {
        self.csv_exporter.export(report)
    }

    pub fn export_json(&self, report: &FuelTaxReport) -> Result<String, ServerError> {
        self.json_exporter.export(report)
    }

    pub fn print_summary(&self, report: &FuelTaxReport) -> String {
        self.summary_printer.print_summary(report)
    }
}

impl Default for IftaFuelTaxUtil {
    fn default() -> Self {
        Self::new()
    }
}
