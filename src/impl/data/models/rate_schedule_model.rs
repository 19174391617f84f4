use std::{collections::HashMap, str::FromStr as _};

use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{
    entities::{FuelType, Jurisdiction, RateTable},
    errors::{InvalidJurisdictionCode, InvalidRate},
};

/// RON representation of one quarter's rate schedule, keyed by jurisdiction
/// code. Rates may be written as numbers or, to keep every digit exactly, as
/// decimal strings (`"TX": "0.2005"`):
///
/// ```text
/// RateSchedule(
///     effective: "2025-Q4",
///     diesel: { "TX": 0.200, "KY": 0.220 },
///     gasoline: { "TX": 0.200 },
///     diesel_surcharge: { "KY": 0.105 },
/// )
/// ```
#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename = "RateSchedule")]
pub(crate) struct RateScheduleModel {
    #[serde(default)]
    effective: Option<String>,
    #[serde(default)]
    diesel: HashMap<String, Decimal>,
    #[serde(default)]
    gasoline: HashMap<String, Decimal>,
    #[serde(default)]
    diesel_surcharge: HashMap<String, Decimal>,
    #[serde(default)]
    gasoline_surcharge: HashMap<String, Decimal>,
}

impl TryFrom<RateScheduleModel> for RateTable {
    type Error = ServerError;

    fn try_from(model: RateScheduleModel) -> Result<Self, Self::Error> {
        let mut table = match model.effective {
            Some(effective) => RateTable::new(effective),
            None => RateTable::default(),
        };
        for (label, fuel_type, rates) in [
            ("diesel", FuelType::Diesel, model.diesel),
            ("gasoline", FuelType::Gasoline, model.gasoline),
        ] {
            for (code, value) in rates {
                let (jurisdiction, rate) = parse_entry(label, &code, value)?;
                table = table.with_rate(fuel_type, jurisdiction, rate);
            }
        }
        for (label, fuel_type, surcharges) in [
            ("diesel surcharge", FuelType::Diesel, model.diesel_surcharge),
            ("gasoline surcharge", FuelType::Gasoline, model.gasoline_surcharge),
        ] {
            for (code, value) in surcharges {
                let (jurisdiction, rate) = parse_entry(label, &code, value)?;
                table = table.with_surcharge(fuel_type, jurisdiction, rate);
            }
        }
        Ok(table)
    }
}

fn parse_entry(
    table: &str,
    code: &str,
    rate: Decimal,
) -> Result<(Jurisdiction, Decimal), ServerError> {
    let jurisdiction =
        Jurisdiction::from_str(code).map_err(|e| InvalidJurisdictionCode::with_debug(code, &e))?;
    if rate < Decimal::ZERO {
        return Err(InvalidRate::new(table, jurisdiction.code(), &rate));
    }
    Ok((jurisdiction, rate))
}
