use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::models::{jurisdiction_model::JurisdictionModel, quantity_model::QuantityModel},
    entities::TripEntry,
    errors::{InvalidCsv, ReadError},
};

#[async_trait]
pub(crate) trait TripLedgerCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<TripEntry>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<TripEntry>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct TripLedgerCsvDatasourceImpl;

impl TripLedgerCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TripLedgerCsvDatasource for TripLedgerCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<TripEntry>, ServerError> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                // Row numbers as seen in a spreadsheet (header is row 1).
                let row = i + 2;
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_jurisdiction = r.get(0).unwrap_or("");
                    let raw_miles = r.get(1).unwrap_or("");
                    let raw_gallons = r.get(2).unwrap_or("");

                    // Parse.
                    let jurisdiction = JurisdictionModel::from_str(raw_jurisdiction)?;
                    let miles = QuantityModel::parse(raw_miles, "miles", row)?;
                    let gallons = QuantityModel::parse(raw_gallons, "gallons", row)?;

                    // Build.
                    Ok(TripEntry {
                        jurisdiction: jurisdiction.into(),
                        miles: miles.into(),
                        gallons_purchased: gallons.into(),
                    })
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<TripEntry>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let s = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&s)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::Jurisdiction;

    #[test]
    fn reads_rows_including_blank_ones() {
        let csv = "jurisdiction,miles,gallons\n\
                   TX,\"1,000\",150\n\
                   ,,\n\
                   ca, 500 ,\n";
        let entries = TripLedgerCsvDatasourceImpl::new().from_string(csv).unwrap();

        assert_eq!(
            entries,
            vec![
                TripEntry::new(Jurisdiction::TX, dec!(1000), dec!(150)),
                TripEntry::blank(),
                TripEntry::new(Jurisdiction::CA, dec!(500), Decimal::ZERO),
            ]
        );
    }

    #[test]
    fn short_rows_default_to_zero() {
        let csv = "jurisdiction,miles,gallons\nNY,250\n";
        let entries = TripLedgerCsvDatasourceImpl::new().from_string(csv).unwrap();
        assert_eq!(entries, vec![TripEntry::new(Jurisdiction::NY, dec!(250), Decimal::ZERO)]);
    }

    #[test]
    fn rejects_unknown_codes_and_bad_numbers() {
        let datasource = TripLedgerCsvDatasourceImpl::new();
        assert!(datasource
            .from_string("jurisdiction,miles,gallons\nXX,100,10\n")
            .is_err());
        assert!(datasource
            .from_string("jurisdiction,miles,gallons\nTX,-100,10\n")
            .is_err());
        assert!(datasource
            .from_string("jurisdiction,miles,gallons\nTX,100,lots\n")
            .is_err());
    }
}
