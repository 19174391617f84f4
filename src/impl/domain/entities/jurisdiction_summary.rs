use rust_decimal::Decimal;

use crate::errors::ApportionmentError;

use super::jurisdiction::Jurisdiction;

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct JurisdictionSummary {
    pub jurisdiction: Jurisdiction,
    pub total_miles: Decimal,
    pub total_gallons_purchased: Decimal,
}

/// Fleet-wide fuel efficiency over the whole reporting period. Only
/// constructible with non-zero miles and gallons, so the miles-per-gallon
/// figure is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetEfficiency {
    total_miles: Decimal,
    total_gallons: Decimal,
}

impl FleetEfficiency {
    pub fn new(total_miles: Decimal, total_gallons: Decimal) -> Result<Self, ApportionmentError> {
        if total_miles <= Decimal::ZERO || total_gallons <= Decimal::ZERO {
            return Err(ApportionmentError::InsufficientData {
                total_miles,
                total_gallons,
            });
        }
        // MPG must be representable for `mpg` to stay infallible.
        total_miles
            .checked_div(total_gallons)
            .ok_or(ApportionmentError::QuantityOutOfRange { field: "fleet MPG" })?;
        Ok(Self {
            total_miles,
            total_gallons,
        })
    }

    pub fn total_miles(&self) -> Decimal {
        self.total_miles
    }

    pub fn total_gallons(&self) -> Decimal {
        self.total_gallons
    }

    pub fn mpg(&self) -> Decimal {
        self.total_miles / self.total_gallons
    }

    /// Gallons consumed while driving the given distance at fleet MPG, i.e.
    /// `miles / mpg`. Evaluated as `miles * gallons / total_miles` so exact
    /// inputs stay exact, falling back to `miles / total_miles * gallons`
    /// when the product does not fit in a `Decimal`.
    pub fn gallons_for(&self, miles: Decimal) -> Result<Decimal, ApportionmentError> {
        miles
            .checked_mul(self.total_gallons)
            .and_then(|product| product.checked_div(self.total_miles))
            .or_else(|| {
                miles
                    .checked_div(self.total_miles)?
                    .checked_mul(self.total_gallons)
            })
            .ok_or(ApportionmentError::QuantityOutOfRange {
                field: "taxable gallons",
            })
    }
}

/// Output of the aggregation stage.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerAggregate {
    pub fleet: FleetEfficiency,
    pub summaries: Vec<JurisdictionSummary>,
    /// Blank or partial rows dropped before aggregation.
    pub ignored_entries: usize,
}

impl LedgerAggregate {
    pub fn total_miles(&self) -> Decimal {
        self.fleet.total_miles()
    }

    pub fn total_gallons(&self) -> Decimal {
        self.fleet.total_gallons()
    }

    pub fn fleet_mpg(&self) -> Decimal {
        self.fleet.mpg()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_totals_are_rejected() {
        assert_eq!(
            FleetEfficiency::new(dec!(1000), Decimal::ZERO),
            Err(ApportionmentError::InsufficientData {
                total_miles: dec!(1000),
                total_gallons: Decimal::ZERO,
            })
        );
        assert!(FleetEfficiency::new(Decimal::ZERO, dec!(10)).is_err());
    }

    #[test]
    fn taxable_gallons_follow_fleet_mpg() {
        let fleet = FleetEfficiency::new(dec!(1500), dec!(150)).unwrap();
        assert_eq!(fleet.mpg(), dec!(10));
        assert_eq!(fleet.gallons_for(dec!(1000)), Ok(dec!(100)));
        assert_eq!(fleet.gallons_for(dec!(500)), Ok(dec!(50)));
    }

    #[test]
    fn taxable_gallons_stay_exact_for_repeating_mpg() {
        // 1000 / 150 mpg is a repeating decimal.
        let fleet = FleetEfficiency::new(dec!(1000), dec!(150)).unwrap();
        assert_eq!(fleet.mpg().round_dp(3), dec!(6.667));
        assert_eq!(fleet.gallons_for(dec!(1000)), Ok(dec!(150)));
    }

    #[test]
    fn taxable_gallons_survive_oversized_products() {
        // 1e15 * 1e14 does not fit in a Decimal; the quotient does.
        let miles = dec!(1000000000000000);
        let gallons = dec!(100000000000000);
        let fleet = FleetEfficiency::new(miles, gallons).unwrap();
        assert_eq!(fleet.gallons_for(miles), Ok(gallons));
        assert_eq!(
            fleet.gallons_for(dec!(500000000000000)),
            Ok(dec!(50000000000000))
        );
    }

    #[test]
    fn unrepresentable_quantities_are_out_of_range() {
        assert_eq!(
            FleetEfficiency::new(Decimal::MAX, dec!(0.001)),
            Err(ApportionmentError::QuantityOutOfRange { field: "fleet MPG" })
        );

        let fleet = FleetEfficiency::new(dec!(0.01), dec!(1000)).unwrap();
        assert_eq!(
            fleet.gallons_for(Decimal::MAX),
            Err(ApportionmentError::QuantityOutOfRange {
                field: "taxable gallons",
            })
        );
    }
}
