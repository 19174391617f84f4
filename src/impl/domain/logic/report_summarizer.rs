use rust_decimal::Decimal;

use crate::{
    entities::{ApportionmentResult, FleetEfficiency, ReportTotals},
    errors::ApportionmentError,
};

use super::utils::checked_sum;

pub(crate) struct ReportSummarizer<'a> {
    results: &'a [ApportionmentResult],
    fleet: &'a FleetEfficiency,
}

impl<'a> ReportSummarizer<'a> {
    pub(crate) fn new(results: &'a [ApportionmentResult], fleet: &'a FleetEfficiency) -> Self {
        Self { results, fleet }
    }

    pub(crate) fn process(self) -> Result<ReportTotals, ApportionmentError> {
        let (total_tax_owed, total_tax_paid, net_tax_due) = self.results.iter().try_fold(
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            |(owed, paid, net), r| {
                Ok::<_, ApportionmentError>((
                    checked_sum(owed, r.total_liability(), "total tax owed")?,
                    checked_sum(paid, r.tax_paid_at_pump, "total tax paid")?,
                    checked_sum(net, r.net_tax, "net tax due")?,
                ))
            },
        )?;
        Ok(ReportTotals {
            total_miles: self.fleet.total_miles(),
            total_gallons_purchased: self.fleet.total_gallons(),
            fleet_mpg: self.fleet.mpg(),
            total_tax_owed,
            total_tax_paid,
            net_tax_due,
        })
    }
}

/// Display order shared by every presentation of a report: ascending by
/// jurisdiction name.
pub(crate) fn sort_for_display(results: &mut [ApportionmentResult]) {
    results.sort_by(|a, b| a.jurisdiction.name().cmp(b.jurisdiction.name()));
}
