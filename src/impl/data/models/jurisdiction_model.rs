use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::Jurisdiction, errors::InvalidJurisdictionCode};

/// Jurisdiction cell of the trip ledger. A blank cell is a row whose
/// jurisdiction has not been chosen yet.
#[derive(Debug)]
pub(crate) struct JurisdictionModel(pub Option<Jurisdiction>);

impl FromStr for JurisdictionModel {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(JurisdictionModel(None));
        }
        Jurisdiction::from_str(s)
            .map(|j| JurisdictionModel(Some(j)))
            .map_err(|e| InvalidJurisdictionCode::with_debug(s.trim(), &e))
    }
}

impl From<JurisdictionModel> for Option<Jurisdiction> {
    fn from(value: JurisdictionModel) -> Self {
        value.0
    }
}
