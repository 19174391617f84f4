use rust_decimal::Decimal;

use super::jurisdiction::Jurisdiction;

/// One row of the trip ledger: distance driven and fuel bought within a
/// single jurisdiction during the reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripEntry {
    pub jurisdiction: Option<Jurisdiction>,
    pub miles: Decimal,
    pub gallons_purchased: Decimal,
}

impl TripEntry {
    pub fn new(jurisdiction: Jurisdiction, miles: Decimal, gallons_purchased: Decimal) -> Self {
        Self {
            jurisdiction: Some(jurisdiction),
            miles,
            gallons_purchased,
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// Rows without a jurisdiction, or without any distance or fuel, carry
    /// nothing to apportion.
    pub fn is_reportable(&self) -> bool {
        self.jurisdiction.is_some()
            && (self.miles > Decimal::ZERO || self.gallons_purchased > Decimal::ZERO)
    }
}
