use super::{fuel_type::FuelType, jurisdiction::Jurisdiction};

/// Non-fatal notes attached to a report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde_derive::Serialize)]
pub enum Advisory {
    /// The jurisdiction has no (or a zero) per-gallon rate for this fuel, so
    /// its result is "not applicable" rather than a break-even.
    NoFuelTaxRate {
        jurisdiction: Jurisdiction,
        fuel_type: FuelType,
    },
    /// Blank or partial ledger rows that were skipped.
    IgnoredEntries(usize),
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::NoFuelTaxRate { jurisdiction, fuel_type } => write!(
                f,
                "{} ({}) has no per-gallon {} tax rate on file. It may tax fuel use through another mechanism (such as a weight-mile tax), so the zero result shown for it does not reflect actual liability.",
                jurisdiction.name(),
                jurisdiction.code(),
                fuel_type.label().to_lowercase(),
            ),
            Advisory::IgnoredEntries(1) => {
                write!(f, "1 incomplete trip entry was ignored (missing jurisdiction, or no miles and no gallons).")
            }
            Advisory::IgnoredEntries(n) => {
                write!(f, "{} incomplete trip entries were ignored (missing jurisdiction, or no miles and no gallons).", n)
            }
        }
    }
}
