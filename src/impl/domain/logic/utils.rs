use rust_decimal::Decimal;

use crate::errors::ApportionmentError;

pub(crate) fn checked_sum(
    a: Decimal,
    b: Decimal,
    field: &'static str,
) -> Result<Decimal, ApportionmentError> {
    a.checked_add(b)
        .ok_or(ApportionmentError::QuantityOutOfRange { field })
}

pub(crate) fn checked_product(
    a: Decimal,
    b: Decimal,
    field: &'static str,
) -> Result<Decimal, ApportionmentError> {
    a.checked_mul(b)
        .ok_or(ApportionmentError::QuantityOutOfRange { field })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn overflow_names_the_field() {
        assert_eq!(checked_sum(dec!(1.5), dec!(2), "miles"), Ok(dec!(3.5)));
        assert_eq!(
            checked_sum(Decimal::MAX, dec!(1), "miles"),
            Err(ApportionmentError::QuantityOutOfRange { field: "miles" })
        );
        assert_eq!(checked_product(dec!(150), dec!(0.2), "tax"), Ok(dec!(30)));
        assert_eq!(
            checked_product(Decimal::MAX, dec!(2), "tax"),
            Err(ApportionmentError::QuantityOutOfRange { field: "tax" })
        );
    }
}
