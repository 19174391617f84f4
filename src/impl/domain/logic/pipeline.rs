//! The apportionment pipeline as plain functions:
//! trip ledger -> [`aggregate`] -> [`apportion`] -> [`summarize`].
//!
//! Every stage is pure. Calling [`build_report`] twice with the same inputs
//! yields the same report. Arithmetic is checked: a value that does not fit
//! in a `Decimal` fails with [`ApportionmentError::QuantityOutOfRange`]
//! instead of panicking.

use crate::{
    entities::{
        ApportionmentResult, FleetEfficiency, FuelTaxReport, FuelTaxReportSpec, FuelType,
        JurisdictionSummary, LedgerAggregate, RateTable, ReportTotals, TripEntry,
    },
    errors::ApportionmentError,
};

use super::{
    advisory_processor::AdvisoryProcessor,
    apportionment_engine::ApportionmentEngine,
    report_summarizer::{sort_for_display, ReportSummarizer},
    trip_aggregator::TripAggregator,
};

/// Drops blank/partial rows, groups the rest per jurisdiction and computes
/// fleet MPG.
pub fn aggregate(entries: &[TripEntry]) -> Result<LedgerAggregate, ApportionmentError> {
    TripAggregator::new(entries).process()
}

pub fn apportion(
    summaries: &[JurisdictionSummary],
    fleet: &FleetEfficiency,
    fuel_type: FuelType,
    rates: &RateTable,
) -> Result<Vec<ApportionmentResult>, ApportionmentError> {
    ApportionmentEngine::new(rates, fuel_type).apportion(summaries, fleet)
}

/// Sorts `results` into display order and totals them.
pub fn summarize(
    results: &mut [ApportionmentResult],
    fleet: &FleetEfficiency,
) -> Result<ReportTotals, ApportionmentError> {
    sort_for_display(results);
    ReportSummarizer::new(results, fleet).process()
}

pub fn build_report(
    spec: &FuelTaxReportSpec,
    rates: &RateTable,
) -> Result<FuelTaxReport, ApportionmentError> {
    let aggregate = aggregate(&spec.entries)?;
    let mut results = apportion(&aggregate.summaries, &aggregate.fleet, spec.fuel_type, rates)?;
    let totals = summarize(&mut results, &aggregate.fleet)?;
    let advisories =
        AdvisoryProcessor::new(&results, spec.fuel_type, aggregate.ignored_entries).process();

    tracing::info!(
        base = %spec.base_jurisdiction,
        period = %spec.reporting_period,
        fuel_type = %spec.fuel_type,
        jurisdictions = results.len(),
        net_tax_due = %totals.net_tax_due,
        "built fuel tax report"
    );

    Ok(FuelTaxReport {
        base_jurisdiction: spec.base_jurisdiction,
        reporting_period: spec.reporting_period.clone(),
        fuel_type: spec.fuel_type,
        results,
        totals,
        advisories,
    })
}
