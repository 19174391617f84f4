use std::str::FromStr as _;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::errors::InvalidQuantity;

/// Non-negative mileage or fuel quantity as typed into the ledger. Blank cells
/// read as zero; thousands separators are accepted.
#[derive(Debug)]
pub(crate) struct QuantityModel(pub Decimal);

impl QuantityModel {
    pub(crate) fn parse(s: &str, field: &str, row: usize) -> Result<Self, ServerError> {
        let raw = s.replace(",", "");
        let numeric_part = raw.trim();
        if numeric_part.is_empty() {
            return Ok(QuantityModel(Decimal::ZERO));
        }
        let amount = Decimal::from_str(numeric_part)
            .or_else(|_| Decimal::from_scientific(numeric_part))
            .map_err(|e| InvalidQuantity::with_debug(field, row, s, &e))?;
        if amount < Decimal::ZERO {
            return Err(InvalidQuantity::new(field, row, s));
        }
        Ok(QuantityModel(amount))
    }
}

impl From<QuantityModel> for Decimal {
    fn from(value: QuantityModel) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn parse(s: &str) -> Result<Decimal, ServerError> {
        QuantityModel::parse(s, "miles", 1).map(Into::into)
    }

    #[test]
    fn parses_plain_and_grouped_numbers() {
        assert_eq!(parse("1000").unwrap(), dec!(1000));
        assert_eq!(parse(" 1,234.5 ").unwrap(), dec!(1234.5));
        assert_eq!(parse("0.25").unwrap(), dec!(0.25));
    }

    #[test]
    fn blank_is_zero() {
        assert_eq!(parse("").unwrap(), Decimal::ZERO);
        assert_eq!(parse("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(parse("-10").is_err());
        assert!(parse("ten").is_err());
    }
}
