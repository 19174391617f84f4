use crate::{
    entities::{ApportionmentResult, FleetEfficiency, FuelType, JurisdictionSummary, RateTable},
    errors::ApportionmentError,
};

use super::utils::checked_product;

/// Turns per-jurisdiction mileage and purchases into tax positions.
///
/// Fuel is taxed where it is consumed, not where it is bought: each
/// jurisdiction is owed tax on the gallons burnt driving its miles at fleet
/// MPG, and credits the tax already paid at the pump on gallons bought there.
pub(crate) struct ApportionmentEngine<'a> {
    rates: &'a RateTable,
    fuel_type: FuelType,
}

impl<'a> ApportionmentEngine<'a> {
    pub(crate) fn new(rates: &'a RateTable, fuel_type: FuelType) -> Self {
        Self { rates, fuel_type }
    }

    pub(crate) fn apportion(
        &self,
        summaries: &[JurisdictionSummary],
        fleet: &FleetEfficiency,
    ) -> Result<Vec<ApportionmentResult>, ApportionmentError> {
        summaries
            .iter()
            .map(|summary| self.apportion_one(summary, fleet))
            .collect()
    }

    fn apportion_one(
        &self,
        summary: &JurisdictionSummary,
        fleet: &FleetEfficiency,
    ) -> Result<ApportionmentResult, ApportionmentError> {
        let jurisdiction = summary.jurisdiction;
        let tax_rate = self.rates.tax_rate(self.fuel_type, jurisdiction);
        let taxable_gallons = fleet.gallons_for(summary.total_miles)?;
        let tax_owed = checked_product(taxable_gallons, tax_rate, "tax owed")?;

        // Surcharges apply to consumed gallons only; they are not collected
        // at the pump.
        let surcharge = self
            .rates
            .surcharge_rate(self.fuel_type, jurisdiction)
            .map(|rate| checked_product(taxable_gallons, rate, "surcharge"))
            .transpose()?;
        let tax_paid_at_pump =
            checked_product(summary.total_gallons_purchased, tax_rate, "tax paid")?;

        let net_tax = tax_owed
            .checked_add(surcharge.unwrap_or_default())
            .and_then(|liability| liability.checked_sub(tax_paid_at_pump))
            .ok_or(ApportionmentError::QuantityOutOfRange { field: "net tax" })?;

        tracing::debug!(
            %jurisdiction,
            %taxable_gallons,
            %tax_rate,
            %net_tax,
            "apportioned jurisdiction"
        );

        Ok(ApportionmentResult {
            jurisdiction,
            miles: summary.total_miles,
            taxable_gallons,
            tax_rate,
            tax_owed,
            surcharge,
            gallons_purchased: summary.total_gallons_purchased,
            tax_paid_at_pump,
            net_tax,
        })
    }
}
