use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
pub enum NetTaxStatus {
    AmountDue,
    Credit,
}

impl NetTaxStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NetTaxStatus::AmountDue => "Amount Due",
            NetTaxStatus::Credit => "Credit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct ReportTotals {
    pub total_miles: Decimal,
    pub total_gallons_purchased: Decimal,
    pub fleet_mpg: Decimal,
    /// Base tax plus surcharges across all jurisdictions.
    pub total_tax_owed: Decimal,
    pub total_tax_paid: Decimal,
    pub net_tax_due: Decimal,
}

impl ReportTotals {
    pub fn net_status(&self) -> NetTaxStatus {
        if self.net_tax_due < Decimal::ZERO {
            NetTaxStatus::Credit
        } else {
            NetTaxStatus::AmountDue
        }
    }

    /// Net amount with the sign removed; the direction is given by
    /// `net_status()`.
    pub fn net_magnitude(&self) -> Decimal {
        self.net_tax_due.abs()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn totals(net: Decimal) -> ReportTotals {
        ReportTotals {
            total_miles: dec!(1000),
            total_gallons_purchased: dec!(150),
            fleet_mpg: dec!(6.6),
            total_tax_owed: dec!(0),
            total_tax_paid: dec!(0),
            net_tax_due: net,
        }
    }

    #[test]
    fn status_labels() {
        assert_eq!(totals(dec!(12.5)).net_status(), NetTaxStatus::AmountDue);
        assert_eq!(totals(dec!(0)).net_status(), NetTaxStatus::AmountDue);
        assert_eq!(totals(dec!(-19.65)).net_status(), NetTaxStatus::Credit);
        assert_eq!(totals(dec!(-19.65)).net_magnitude(), dec!(19.65));
        assert_eq!(NetTaxStatus::Credit.label(), "Credit");
    }
}
