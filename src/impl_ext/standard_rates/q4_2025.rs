use std::sync::LazyLock;

use rust_decimal_macros::dec;

use crate::entities::{FuelType::*, Jurisdiction::*, RateTable};

/// Per-gallon rates (USD) for the fourth quarter of 2025.
///
/// Oregon collects no per-gallon diesel tax from IFTA carriers (it uses a
/// weight-mile tax), so its diesel rate is zero.
pub static STANDARD_RATES_2025_Q4: LazyLock<RateTable> = LazyLock::new(|| {
    RateTable::new("2025-Q4")
        .with_rate(Diesel, AL, dec!(0.320))
        .with_rate(Gasoline, AL, dec!(0.300))
        .with_rate(Diesel, AZ, dec!(0.260))
        .with_rate(Gasoline, AZ, dec!(0.180))
        .with_rate(Diesel, AR, dec!(0.285))
        .with_rate(Gasoline, AR, dec!(0.247))
        .with_rate(Diesel, CA, dec!(0.971))
        .with_rate(Gasoline, CA, dec!(0.596))
        .with_rate(Diesel, CO, dec!(0.325))
        .with_rate(Gasoline, CO, dec!(0.280))
        .with_rate(Diesel, CT, dec!(0.492))
        .with_rate(Gasoline, CT, dec!(0.250))
        .with_rate(Diesel, DE, dec!(0.220))
        .with_rate(Gasoline, DE, dec!(0.230))
        .with_rate(Diesel, DC, dec!(0.350))
        .with_rate(Gasoline, DC, dec!(0.350))
        .with_rate(Diesel, FL, dec!(0.381))
        .with_rate(Gasoline, FL, dec!(0.381))
        .with_rate(Diesel, GA, dec!(0.371))
        .with_rate(Gasoline, GA, dec!(0.330))
        .with_rate(Diesel, ID, dec!(0.320))
        .with_rate(Gasoline, ID, dec!(0.320))
        .with_rate(Diesel, IL, dec!(0.742))
        .with_rate(Gasoline, IL, dec!(0.664))
        .with_rate(Diesel, IN, dec!(0.610))
        .with_rate(Gasoline, IN, dec!(0.360))
        .with_rate(Diesel, IA, dec!(0.325))
        .with_rate(Gasoline, IA, dec!(0.300))
        .with_rate(Diesel, KS, dec!(0.260))
        .with_rate(Gasoline, KS, dec!(0.240))
        .with_rate(Diesel, KY, dec!(0.220))
        .with_rate(Gasoline, KY, dec!(0.220))
        .with_rate(Diesel, LA, dec!(0.200))
        .with_rate(Gasoline, LA, dec!(0.200))
        .with_rate(Diesel, ME, dec!(0.312))
        .with_rate(Gasoline, ME, dec!(0.300))
        .with_rate(Diesel, MD, dec!(0.474))
        .with_rate(Gasoline, MD, dec!(0.470))
        .with_rate(Diesel, MA, dec!(0.240))
        .with_rate(Gasoline, MA, dec!(0.240))
        .with_rate(Diesel, MI, dec!(0.316))
        .with_rate(Gasoline, MI, dec!(0.316))
        .with_rate(Diesel, MN, dec!(0.316))
        .with_rate(Gasoline, MN, dec!(0.316))
        .with_rate(Diesel, MS, dec!(0.180))
        .with_rate(Gasoline, MS, dec!(0.180))
        .with_rate(Diesel, MO, dec!(0.295))
        .with_rate(Gasoline, MO, dec!(0.295))
        .with_rate(Diesel, MT, dec!(0.298))
        .with_rate(Gasoline, MT, dec!(0.330))
        .with_rate(Diesel, NE, dec!(0.303))
        .with_rate(Gasoline, NE, dec!(0.303))
        .with_rate(Diesel, NV, dec!(0.270))
        .with_rate(Gasoline, NV, dec!(0.230))
        .with_rate(Diesel, NH, dec!(0.222))
        .with_rate(Gasoline, NH, dec!(0.222))
        .with_rate(Diesel, NJ, dec!(0.519))
        .with_rate(Gasoline, NJ, dec!(0.441))
        .with_rate(Diesel, NM, dec!(0.210))
        .with_rate(Gasoline, NM, dec!(0.170))
        .with_rate(Diesel, NY, dec!(0.388))
        .with_rate(Gasoline, NY, dec!(0.362))
        .with_rate(Diesel, NC, dec!(0.405))
        .with_rate(Gasoline, NC, dec!(0.405))
        .with_rate(Diesel, ND, dec!(0.230))
        .with_rate(Gasoline, ND, dec!(0.230))
        .with_rate(Diesel, OH, dec!(0.470))
        .with_rate(Gasoline, OH, dec!(0.385))
        .with_rate(Diesel, OK, dec!(0.190))
        .with_rate(Gasoline, OK, dec!(0.190))
        .with_rate(Diesel, OR, dec!(0.000))
        .with_rate(Gasoline, OR, dec!(0.400))
        .with_rate(Diesel, PA, dec!(0.785))
        .with_rate(Gasoline, PA, dec!(0.576))
        .with_rate(Diesel, RI, dec!(0.370))
        .with_rate(Gasoline, RI, dec!(0.370))
        .with_rate(Diesel, SC, dec!(0.280))
        .with_rate(Gasoline, SC, dec!(0.280))
        .with_rate(Diesel, SD, dec!(0.280))
        .with_rate(Gasoline, SD, dec!(0.280))
        .with_rate(Diesel, TN, dec!(0.270))
        .with_rate(Gasoline, TN, dec!(0.260))
        .with_rate(Diesel, TX, dec!(0.200))
        .with_rate(Gasoline, TX, dec!(0.200))
        .with_rate(Diesel, UT, dec!(0.379))
        .with_rate(Gasoline, UT, dec!(0.379))
        .with_rate(Diesel, VT, dec!(0.320))
        .with_rate(Gasoline, VT, dec!(0.300))
        .with_rate(Diesel, VA, dec!(0.427))
        .with_rate(Gasoline, VA, dec!(0.310))
        .with_rate(Diesel, WA, dec!(0.494))
        .with_rate(Gasoline, WA, dec!(0.494))
        .with_rate(Diesel, WV, dec!(0.357))
        .with_rate(Gasoline, WV, dec!(0.357))
        .with_rate(Diesel, WI, dec!(0.329))
        .with_rate(Gasoline, WI, dec!(0.329))
        .with_rate(Diesel, WY, dec!(0.240))
        .with_rate(Gasoline, WY, dec!(0.240))
        .with_rate(Diesel, AB, dec!(0.396))
        .with_rate(Gasoline, AB, dec!(0.396))
        .with_rate(Diesel, BC, dec!(0.771))
        .with_rate(Gasoline, BC, dec!(0.708))
        .with_rate(Diesel, MB, dec!(0.364))
        .with_rate(Gasoline, MB, dec!(0.340))
        .with_rate(Diesel, NB, dec!(0.620))
        .with_rate(Gasoline, NB, dec!(0.425))
        .with_rate(Diesel, NL, dec!(0.542))
        .with_rate(Gasoline, NL, dec!(0.404))
        .with_rate(Diesel, NS, dec!(0.426))
        .with_rate(Gasoline, NS, dec!(0.425))
        .with_rate(Diesel, ON, dec!(0.396))
        .with_rate(Gasoline, ON, dec!(0.396))
        .with_rate(Diesel, PE, dec!(0.564))
        .with_rate(Gasoline, PE, dec!(0.364))
        .with_rate(Diesel, QC, dec!(0.878))
        .with_rate(Gasoline, QC, dec!(0.524))
        .with_rate(Diesel, SK, dec!(0.417))
        .with_rate(Gasoline, SK, dec!(0.417))
        .with_surcharge(Diesel, KY, dec!(0.105))
});

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::entities::{FuelType, Jurisdiction};

    #[test]
    fn covers_every_jurisdiction() {
        for j in Jurisdiction::ALL {
            assert!(STANDARD_RATES_2025_Q4.tax_rate(FuelType::Gasoline, j) > Decimal::ZERO);
            if j != Jurisdiction::OR {
                assert!(STANDARD_RATES_2025_Q4.has_fuel_tax(FuelType::Diesel, j));
            }
        }
        assert!(!STANDARD_RATES_2025_Q4.has_fuel_tax(FuelType::Diesel, Jurisdiction::OR));
    }

    #[test]
    fn kentucky_diesel_surcharge() {
        assert_eq!(
            STANDARD_RATES_2025_Q4.surcharge_rate(FuelType::Diesel, Jurisdiction::KY),
            Some(dec!(0.105))
        );
        assert_eq!(
            STANDARD_RATES_2025_Q4.surcharge_rate(FuelType::Gasoline, Jurisdiction::KY),
            None
        );
    }
}
