use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};
use rust_decimal::{Decimal, RoundingStrategy};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Rounds half away from zero, the way amounts are rounded on the return.
/// This is the only place pipeline values lose precision.
pub(crate) fn round(amount: Decimal, decimal_places: u32) -> Decimal {
    let rounded =
        amount.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // Avoid printing "-0.00".
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Plain fixed-point rendering (no grouping), as used in CSV exports.
pub(crate) fn format_fixed(amount: Decimal, decimal_places: u32) -> String {
    let dp = decimal_places as usize;
    format!("{:.dp$}", round(amount, decimal_places))
}

/// Rendering for user-entered quantities (miles, gallons): rounded to at most
/// two decimal places, without trailing zeros.
pub(crate) fn format_quantity(amount: Decimal) -> String {
    round(amount, 2).normalize().to_string()
}

/// Format a non-negative value with thousands separators. Uses en locale
/// ('.' as decimal mark, i.e. 1,000.00) regardless of user's locale.
pub(crate) fn format_grouped(amount: Decimal, decimal_places: u32) -> String {
    let rounded = round(amount.abs(), decimal_places);
    // A scale-0 mantissa is the integer part itself, and it always fits in an
    // i128.
    let mut integer = rounded.trunc();
    integer.rescale(0);
    let amount_integer_part = integer.mantissa().to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        return amount_integer_part;
    }
    let dp = decimal_places as usize;
    let amount_fractional_part = format!("{:.dp$}", rounded.fract())
        .split('.')
        .nth(1)
        .map(|f| f.to_string())
        .unwrap_or_default();
    format!("{}.{:0<dp$}", amount_integer_part, amount_fractional_part)
}

/// Format cash amount with currency symbol, correct number of decimal places
/// and thousands separators. The sign is dropped; callers convey direction
/// with a label or accounting parentheses.
pub(crate) fn format_amount(amount: Decimal, currency: Currency) -> String {
    format!(
        "{}{}",
        currency.symbol(),
        format_grouped(amount, decimal_places(currency))
    )
}

/// Accounting style: negative amounts in parentheses, e.g. "($77.85)".
pub(crate) fn format_signed_amount(amount: Decimal, currency: Currency) -> String {
    let formatted = format_amount(amount, currency);
    if round(amount, decimal_places(currency)) < Decimal::ZERO {
        format!("({})", formatted)
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round(dec!(2.345), 2), dec!(2.35));
        assert_eq!(round(dec!(-2.345), 2), dec!(-2.35));
        assert_eq!(round(dec!(-0.001), 2), Decimal::ZERO);
    }

    #[test]
    fn fixed_and_quantity_formats() {
        assert_eq!(format_fixed(dec!(30), 2), "30.00");
        assert_eq!(format_fixed(dec!(0.2), 3), "0.200");
        assert_eq!(format_fixed(dec!(-19.649), 2), "-19.65");
        assert_eq!(format_fixed(dec!(-0.0001), 2), "0.00");
        assert_eq!(format_quantity(dec!(1000.00)), "1000");
        assert_eq!(format_quantity(dec!(12.504)), "12.5");
    }

    #[test]
    fn currency_formats() {
        assert_eq!(format_amount(dec!(1234567.891), Currency::USD), "$1,234,567.89");
        assert_eq!(format_amount(dec!(0.5), Currency::USD), "$0.50");
        assert_eq!(format_amount(dec!(-19.65), Currency::USD), "$19.65");
        assert_eq!(format_signed_amount(dec!(-77.85), Currency::USD), "($77.85)");
        assert_eq!(format_signed_amount(dec!(58.2), Currency::USD), "$58.20");
    }

    #[test]
    fn grouping_covers_the_full_decimal_range() {
        assert_eq!(
            format_grouped(Decimal::MAX, 0),
            "79,228,162,514,264,337,593,543,950,335"
        );
        assert_eq!(
            format_amount(-Decimal::MAX, Currency::USD),
            "$79,228,162,514,264,337,593,543,950,335.00"
        );
        assert_eq!(
            format_grouped(dec!(9223372036854775808.5), 1),
            "9,223,372,036,854,775,808.5"
        );
    }
}
