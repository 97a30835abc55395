use crate::core::models::PropertyRecord;
use crate::core::rest::PugClient;
use crate::engine::error::EngineError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PropertyResponse {
    #[serde(rename = "PropertyTable")]
    property_table: Option<PropertyTable>,
}

#[derive(Debug, Deserialize)]
struct PropertyTable {
    #[serde(rename = "Properties", default)]
    properties: Vec<PropertyRecord>,
}

/// Fetches the fixed molecular property set for a compound name.
///
/// Only the first row of the property table is used. An unknown compound, an
/// HTTP error, and a malformed body are all distinct error values here, but
/// every caller in the workflow maps them to the same "not found" display, so
/// the user-visible behavior never distinguishes failure causes.
///
/// # Errors
///
/// Returns [`EngineError::CompoundNotFound`] when the table is absent or
/// empty, or a transport/decode error from the call itself.
pub fn fetch(client: &PugClient, name: &str) -> Result<PropertyRecord, EngineError> {
    let url = client.endpoints().properties_for_name(name);
    let response: PropertyResponse = client.get_json(&url)?;
    response
        .property_table
        .and_then(|table| table.properties.into_iter().next())
        .ok_or_else(|| EngineError::CompoundNotFound {
            name: name.to_string(),
        })
}
