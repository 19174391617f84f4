use fractic_server_error::{define_client_error, define_internal_error, ServerError};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::entities::Jurisdiction;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    InvalidJurisdictionCode,
    "Unknown jurisdiction code: '{code}'.",
    { code: &str }
);
define_client_error!(
    InvalidQuantity,
    "Invalid {field} on row {row}: '{value}' (expected a non-negative number).",
    { field: &str, row: usize, value: &str }
);
define_client_error!(
    InvalidRate,
    "Invalid {table} rate for {jurisdiction}: {value} (expected a non-negative number).",
    { table: &str, jurisdiction: &str, value: &Decimal }
);

// Apportionment-related.
define_client_error!(
    EmptyTripLedger,
    "No valid trip entries. Add at least one row with a jurisdiction and miles or gallons."
);
define_client_error!(
    InsufficientTripData,
    "Both a distance and a fuel purchase are required to compute fleet MPG (total miles: {total_miles}, total gallons: {total_gallons}).",
    { total_miles: &Decimal, total_gallons: &Decimal }
);
define_client_error!(
    NegativeTripQuantity,
    "Negative {field} ({value}) entered for {jurisdiction}.",
    { field: &str, value: &Decimal, jurisdiction: &str }
);
define_client_error!(
    TripQuantityOutOfRange,
    "The {field} computed from the trip ledger is too large to represent.",
    { field: &str }
);

// Exporting.
define_internal_error!(
    CsvWriteFailed,
    "Failed to write CSV export: {details}.",
    { details: &str }
);
define_internal_error!(JsonWriteFailed, "Failed to serialize report to JSON.");

/// Validation failures raised by the apportionment pipeline itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApportionmentError {
    /// No row has a jurisdiction together with miles or gallons.
    #[error("no valid trip entries")]
    EmptyInput,

    /// Fleet MPG is undefined without both distance and fuel.
    #[error("insufficient data: total miles {total_miles}, total gallons {total_gallons}")]
    InsufficientData {
        total_miles: Decimal,
        total_gallons: Decimal,
    },

    #[error("negative {field} ({value}) for {jurisdiction}")]
    NegativeQuantity {
        jurisdiction: Jurisdiction,
        field: &'static str,
        value: Decimal,
    },

    /// An intermediate value does not fit in a `Decimal`.
    #[error("{field} out of range")]
    QuantityOutOfRange { field: &'static str },
}

impl From<ApportionmentError> for ServerError {
    fn from(e: ApportionmentError) -> Self {
        match e {
            ApportionmentError::EmptyInput => EmptyTripLedger::new(),
            ApportionmentError::InsufficientData {
                total_miles,
                total_gallons,
            } => InsufficientTripData::new(&total_miles, &total_gallons),
            ApportionmentError::NegativeQuantity {
                jurisdiction,
                field,
                value,
            } => NegativeTripQuantity::new(field, &value, jurisdiction.code()),
            ApportionmentError::QuantityOutOfRange { field } => TripQuantityOutOfRange::new(field),
        }
    }
}
