use rust_decimal::Decimal;

use super::{
    advisory::Advisory, apportionment_result::ApportionmentResult, fuel_type::FuelType,
    jurisdiction::Jurisdiction, report_totals::ReportTotals, reporting_period::ReportingPeriod,
    trip_entry::TripEntry,
};

// Before apportionment.
// ---

/// Report-level fields entered alongside the trip ledger.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    /// Where the carrier is licensed. Informational (labels and filenames).
    pub base_jurisdiction: Jurisdiction,
    pub reporting_period: ReportingPeriod,
    pub fuel_type: FuelType,
}

impl ReportHeader {
    pub fn with_entries(self, entries: Vec<TripEntry>) -> FuelTaxReportSpec {
        FuelTaxReportSpec {
            base_jurisdiction: self.base_jurisdiction,
            reporting_period: self.reporting_period,
            fuel_type: self.fuel_type,
            entries,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FuelTaxReportSpec {
    pub base_jurisdiction: Jurisdiction,
    pub reporting_period: ReportingPeriod,
    pub fuel_type: FuelType,
    pub entries: Vec<TripEntry>,
}

// After apportionment.
// ---

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct FuelTaxReport {
    pub base_jurisdiction: Jurisdiction,
    pub reporting_period: ReportingPeriod,
    pub fuel_type: FuelType,
    /// Sorted by jurisdiction name.
    pub results: Vec<ApportionmentResult>,
    pub totals: ReportTotals,
    pub advisories: Vec<Advisory>,
}

impl FuelTaxReport {
    pub fn result_for(&self, jurisdiction: Jurisdiction) -> Option<&ApportionmentResult> {
        self.results.iter().find(|r| r.jurisdiction == jurisdiction)
    }

    pub fn net_tax_for(&self, jurisdiction: Jurisdiction) -> Decimal {
        self.result_for(jurisdiction)
            .map_or(Decimal::ZERO, |r| r.net_tax)
    }

    /// Suggested file name for the CSV export, e.g. `IFTA_TX_2025-Q4.csv`.
    pub fn export_filename(&self) -> String {
        let period: String = self
            .reporting_period
            .to_string()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        format!("IFTA_{}_{}.csv", self.base_jurisdiction.code(), period)
    }
}
