use crate::entities::{Advisory, ApportionmentResult, FuelType};

pub(crate) struct AdvisoryProcessor<'a> {
    results: &'a [ApportionmentResult],
    fuel_type: FuelType,
    ignored_entries: usize,
}

impl<'a> AdvisoryProcessor<'a> {
    pub(crate) fn new(
        results: &'a [ApportionmentResult],
        fuel_type: FuelType,
        ignored_entries: usize,
    ) -> Self {
        Self {
            results,
            fuel_type,
            ignored_entries,
        }
    }

    pub(crate) fn process(self) -> Vec<Advisory> {
        let no_rate = self
            .results
            .iter()
            .filter(|r| r.is_rate_missing())
            .map(|r| Advisory::NoFuelTaxRate {
                jurisdiction: r.jurisdiction,
                fuel_type: self.fuel_type,
            });
        let ignored = (self.ignored_entries > 0)
            .then_some(Advisory::IgnoredEntries(self.ignored_entries));

        let advisories: Vec<Advisory> = no_rate.chain(ignored).collect();
        for advisory in &advisories {
            tracing::warn!(%advisory, "fuel tax report advisory");
        }
        advisories
    }
}
