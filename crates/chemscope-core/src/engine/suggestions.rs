use crate::core::rest::PugClient;
use crate::engine::error::EngineError;
use serde::Deserialize;

/// Autocomplete response envelope.
///
/// The service has shipped two envelope keys over time (`dictionary` and
/// `dictionary_terms`); both are accepted and an absent dictionary is an
/// empty candidate list, not an error.
#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(rename = "dictionary_terms", alias = "dictionary", default)]
    dictionary: Option<Dictionary>,
}

#[derive(Debug, Deserialize)]
struct Dictionary {
    #[serde(default)]
    compound: Vec<String>,
}

/// Fetches autocomplete candidates for a partial compound name.
///
/// The candidate order is whatever the remote dictionary returns. Callers
/// short-circuit on an empty query; this function does not special-case it.
///
/// # Errors
///
/// Returns an error on transport failure or a malformed response body.
pub fn fetch(client: &PugClient, query: &str) -> Result<Vec<String>, EngineError> {
    let url = client.endpoints().autocomplete(query);
    let response: AutocompleteResponse = client.get_json(&url)?;
    Ok(response
        .dictionary
        .map(|dictionary| dictionary.compound)
        .unwrap_or_default())
}
