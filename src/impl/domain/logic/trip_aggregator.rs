use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    entities::{FleetEfficiency, Jurisdiction, JurisdictionSummary, LedgerAggregate, TripEntry},
    errors::ApportionmentError,
};

use super::utils::checked_sum;

/// Reduces the trip ledger to one summary per jurisdiction and derives the
/// fleet MPG from the grand totals.
pub(crate) struct TripAggregator<'a> {
    entries: &'a [TripEntry],
}

impl<'a> TripAggregator<'a> {
    pub(crate) fn new(entries: &'a [TripEntry]) -> Self {
        Self { entries }
    }

    pub(crate) fn process(self) -> Result<LedgerAggregate, ApportionmentError> {
        for entry in self.entries {
            if let Some(jurisdiction) = entry.jurisdiction {
                check_non_negative(jurisdiction, "miles", entry.miles)?;
                check_non_negative(jurisdiction, "gallons", entry.gallons_purchased)?;
            }
        }

        // Filter.
        let reportable: Vec<(Jurisdiction, &TripEntry)> = self
            .entries
            .iter()
            .filter(|e| e.is_reportable())
            .filter_map(|e| e.jurisdiction.map(|j| (j, e)))
            .collect();
        let ignored_entries = self.entries.len() - reportable.len();
        if reportable.is_empty() {
            tracing::debug!(rows = self.entries.len(), "trip ledger has no reportable rows");
            return Err(ApportionmentError::EmptyInput);
        }

        // Totals.
        let (total_miles, total_gallons) = reportable.iter().try_fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(miles, gallons), (_, e)| {
                Ok::<_, ApportionmentError>((
                    checked_sum(miles, e.miles, "total miles")?,
                    checked_sum(gallons, e.gallons_purchased, "total gallons")?,
                ))
            },
        )?;
        let fleet = FleetEfficiency::new(total_miles, total_gallons)?;

        // Group by jurisdiction. Quantities are non-negative, so per-jurisdiction
        // sums are bounded by the totals above.
        let buckets: BTreeMap<Jurisdiction, (Decimal, Decimal)> =
            reportable
                .iter()
                .fold(BTreeMap::new(), |mut map, (jurisdiction, e)| {
                    let bucket = map.entry(*jurisdiction).or_default();
                    bucket.0 += e.miles;
                    bucket.1 += e.gallons_purchased;
                    map
                });
        let summaries: Vec<JurisdictionSummary> = buckets
            .into_iter()
            .map(|(jurisdiction, (miles, gallons))| JurisdictionSummary {
                jurisdiction,
                total_miles: miles,
                total_gallons_purchased: gallons,
            })
            .collect();

        tracing::debug!(
            jurisdictions = summaries.len(),
            ignored_entries,
            %total_miles,
            %total_gallons,
            "aggregated trip ledger"
        );

        Ok(LedgerAggregate {
            fleet,
            summaries,
            ignored_entries,
        })
    }
}

fn check_non_negative(
    jurisdiction: Jurisdiction,
    field: &'static str,
    value: Decimal,
) -> Result<(), ApportionmentError> {
    if value < Decimal::ZERO {
        return Err(ApportionmentError::NegativeQuantity {
            jurisdiction,
            field,
            value,
        });
    }
    Ok(())
}
