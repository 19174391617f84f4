use std::collections::HashMap;

use rust_decimal::Decimal;

use super::{fuel_type::FuelType, jurisdiction::Jurisdiction};

/// Per-gallon fuel tax rates for one rate period, plus the surcharges levied
/// by some jurisdictions on top of the base rate.
///
/// Lookups never fail: a jurisdiction without an entry has a base rate of
/// zero and no surcharge. Rates are expected to be non-negative (enforced when
/// loading a schedule from configuration).
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    effective: Option<String>,
    rates: HashMap<FuelType, HashMap<Jurisdiction, Decimal>>,
    surcharges: HashMap<FuelType, HashMap<Jurisdiction, Decimal>>,
}

impl RateTable {
    pub fn new(effective: impl Into<String>) -> Self {
        Self {
            effective: Some(effective.into()),
            ..Default::default()
        }
    }

    pub fn with_rate(
        mut self,
        fuel_type: FuelType,
        jurisdiction: Jurisdiction,
        rate: Decimal,
    ) -> Self {
        self.rates
            .entry(fuel_type)
            .or_default()
            .insert(jurisdiction, rate);
        self
    }

    pub fn with_surcharge(
        mut self,
        fuel_type: FuelType,
        jurisdiction: Jurisdiction,
        rate: Decimal,
    ) -> Self {
        self.surcharges
            .entry(fuel_type)
            .or_default()
            .insert(jurisdiction, rate);
        self
    }

    /// Rate period label, such as "2025-Q4".
    pub fn effective(&self) -> Option<&str> {
        self.effective.as_deref()
    }

    pub fn tax_rate(&self, fuel_type: FuelType, jurisdiction: Jurisdiction) -> Decimal {
        self.rates
            .get(&fuel_type)
            .and_then(|m| m.get(&jurisdiction))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn surcharge_rate(
        &self,
        fuel_type: FuelType,
        jurisdiction: Jurisdiction,
    ) -> Option<Decimal> {
        self.surcharges
            .get(&fuel_type)
            .and_then(|m| m.get(&jurisdiction))
            .copied()
    }

    /// False for jurisdictions that collect no per-gallon tax on this fuel
    /// (missing or zero rate), e.g. those using a weight-mile tax instead.
    pub fn has_fuel_tax(&self, fuel_type: FuelType, jurisdiction: Jurisdiction) -> bool {
        !self.tax_rate(fuel_type, jurisdiction).is_zero()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn lookups_are_total() {
        let table = RateTable::new("2025-Q4")
            .with_rate(FuelType::Diesel, Jurisdiction::TX, dec!(0.200))
            .with_surcharge(FuelType::Diesel, Jurisdiction::KY, dec!(0.105));

        assert_eq!(table.tax_rate(FuelType::Diesel, Jurisdiction::TX), dec!(0.200));
        assert_eq!(table.tax_rate(FuelType::Gasoline, Jurisdiction::TX), Decimal::ZERO);
        assert_eq!(table.tax_rate(FuelType::Diesel, Jurisdiction::CA), Decimal::ZERO);
        assert_eq!(
            table.surcharge_rate(FuelType::Diesel, Jurisdiction::KY),
            Some(dec!(0.105))
        );
        assert_eq!(table.surcharge_rate(FuelType::Gasoline, Jurisdiction::KY), None);
        assert_eq!(table.effective(), Some("2025-Q4"));
    }

    #[test]
    fn explicit_zero_rate_has_no_fuel_tax() {
        let table = RateTable::new("2025-Q4")
            .with_rate(FuelType::Diesel, Jurisdiction::OR, Decimal::ZERO)
            .with_rate(FuelType::Diesel, Jurisdiction::TX, dec!(0.200));

        assert!(!table.has_fuel_tax(FuelType::Diesel, Jurisdiction::OR));
        assert!(!table.has_fuel_tax(FuelType::Diesel, Jurisdiction::NV));
        assert!(table.has_fuel_tax(FuelType::Diesel, Jurisdiction::TX));
    }
}
