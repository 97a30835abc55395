use crate::core::models::Cid;
use crate::core::rest::PugClient;
use crate::engine::error::EngineError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CidResponse {
    #[serde(rename = "IdentifierList")]
    identifier_list: Option<IdentifierList>,
}

#[derive(Debug, Deserialize)]
struct IdentifierList {
    #[serde(rename = "CID", default)]
    cids: Vec<Cid>,
}

/// Resolves a free-text compound name to its first matching identifier.
///
/// The remote service may return several identifiers for one name; only the
/// first is used, matching the first-match policy used throughout the lookup
/// layer.
///
/// # Errors
///
/// Returns [`EngineError::NoIdentifier`] when the identifier list is absent or
/// empty, or a transport/decode error from the call itself.
pub fn cid_for_name(client: &PugClient, name: &str) -> Result<Cid, EngineError> {
    let url = client.endpoints().cids_for_name(name);
    let response: CidResponse = client.get_json(&url)?;
    response
        .identifier_list
        .and_then(|list| list.cids.first().copied())
        .ok_or_else(|| EngineError::NoIdentifier {
            name: name.to_string(),
        })
}
