use rust_decimal::Decimal;

use super::jurisdiction::Jurisdiction;

/// Tax position towards a single jurisdiction. Monetary fields are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct ApportionmentResult {
    pub jurisdiction: Jurisdiction,
    pub miles: Decimal,
    pub taxable_gallons: Decimal,
    pub tax_rate: Decimal,
    pub tax_owed: Decimal,
    /// Present only for jurisdictions that levy a surcharge on this fuel.
    pub surcharge: Option<Decimal>,
    pub gallons_purchased: Decimal,
    pub tax_paid_at_pump: Decimal,
    /// Positive: additional tax due. Negative: credit.
    pub net_tax: Decimal,
}

impl ApportionmentResult {
    pub fn surcharge_amount(&self) -> Decimal {
        self.surcharge.unwrap_or(Decimal::ZERO)
    }

    /// Base tax plus surcharge on the fuel consumed in this jurisdiction.
    pub fn total_liability(&self) -> Decimal {
        self.tax_owed + self.surcharge_amount()
    }

    /// True when the jurisdiction collects no per-gallon tax on this fuel, in
    /// which case a zero `net_tax` means "not applicable" rather than
    /// "balanced".
    pub fn is_rate_missing(&self) -> bool {
        self.tax_rate.is_zero()
    }
}
