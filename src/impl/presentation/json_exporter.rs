use fractic_server_error::ServerError;

use crate::{entities::FuelTaxReport, errors::JsonWriteFailed};

/// Full-precision JSON rendering of a report. Decimals are written as strings
/// so no value passes through a float.
pub(crate) struct JsonExporter;

impl JsonExporter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn export(&self, report: &FuelTaxReport) -> Result<String, ServerError> {
        serde_json::to_string_pretty(report).map_err(|e| JsonWriteFailed::with_debug(&e))
    }
}
