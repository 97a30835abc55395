use crate::core::rest::PugClient;
use crate::engine::error::EngineError;
use crate::engine::resolve;
use serde::Deserialize;

/// The fixed fallback shown whenever no hazard text can be extracted.
pub const NO_SAFETY_DATA: &str = "No safety data available.";

/// The section heading scanned for in the structured record.
const SAFETY_HEADING: &str = "Safety and Hazards";

#[derive(Debug, Deserialize)]
struct ViewResponse {
    #[serde(rename = "Record")]
    record: Option<Record>,
}

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "Section", default)]
    sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct Section {
    #[serde(rename = "TOCHeading", default)]
    toc_heading: String,
    #[serde(rename = "Information", default)]
    information: Vec<Information>,
}

#[derive(Debug, Deserialize)]
struct Information {
    #[serde(rename = "Value")]
    value: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Value {
    #[serde(rename = "StringWithMarkup", default)]
    strings: Vec<StringWithMarkup>,
}

#[derive(Debug, Deserialize)]
struct StringWithMarkup {
    #[serde(rename = "String")]
    text: Option<String>,
}

/// Fetches the first hazard summary string for a compound name.
///
/// Two dependent requests: name-to-identifier resolution, then the structured
/// record. The record's top-level sections are scanned in order for the
/// "Safety and Hazards" heading; only the *first* information entry of a
/// matching section and the *first* textual value inside it are considered.
/// `Ok(None)` means the record exists but holds no qualifying entry; callers
/// substitute [`NO_SAFETY_DATA`] for both `Ok(None)` and `Err(_)`.
///
/// # Errors
///
/// Returns an error when name resolution or the record fetch fails.
pub fn fetch(client: &PugClient, name: &str) -> Result<Option<String>, EngineError> {
    let cid = resolve::cid_for_name(client, name)?;
    let url = client.endpoints().record_view(cid);
    let response: ViewResponse = client.get_json(&url)?;

    let Some(record) = response.record else {
        return Ok(None);
    };

    for section in &record.sections {
        if section.toc_heading != SAFETY_HEADING {
            continue;
        }
        let text = section
            .information
            .first()
            .and_then(|info| info.value.as_ref())
            .and_then(|value| value.strings.first())
            .and_then(|entry| entry.text.clone());
        if text.is_some() {
            return Ok(text);
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rest::client::testing::{Route, client_with};

    const CIDS: (&str, Route) = (
        "/cids/JSON",
        Route::Body(r#"{"IdentifierList":{"CID":[2244]}}"#),
    );

    fn view_route(body: &'static str) -> (&'static str, Route) {
        ("/pug_view/data/compound/", Route::Body(body))
    }

    #[test]
    fn extracts_first_string_of_first_information_entry() {
        let client = client_with(vec![
            CIDS,
            view_route(
                r#"{"Record":{"Section":[
                    {"TOCHeading":"Names and Identifiers"},
                    {"TOCHeading":"Safety and Hazards","Information":[
                        {"Value":{"StringWithMarkup":[
                            {"String":"Causes serious eye irritation."},
                            {"String":"Second entry is never reached."}
                        ]}},
                        {"Value":{"StringWithMarkup":[{"String":"Later info entry."}]}}
                    ]}
                ]}}"#,
            ),
        ]);

        assert_eq!(
            fetch(&client, "aspirin").unwrap().as_deref(),
            Some("Causes serious eye irritation.")
        );
    }

    #[test]
    fn section_without_information_yields_none() {
        let client = client_with(vec![
            CIDS,
            view_route(r#"{"Record":{"Section":[{"TOCHeading":"Safety and Hazards"}]}}"#),
        ]);

        assert_eq!(fetch(&client, "aspirin").unwrap(), None);
    }

    #[test]
    fn missing_safety_section_yields_none() {
        let client = client_with(vec![
            CIDS,
            view_route(r#"{"Record":{"Section":[{"TOCHeading":"Toxicity"}]}}"#),
        ]);

        assert_eq!(fetch(&client, "aspirin").unwrap(), None);
    }

    #[test]
    fn unresolvable_name_is_an_error() {
        let client = client_with(vec![(
            "/cids/JSON",
            Route::Body(r#"{"IdentifierList":{"CID":[]}}"#),
        )]);

        assert!(matches!(
            fetch(&client, "zzz"),
            Err(EngineError::NoIdentifier { .. })
        ));
    }

    #[test]
    fn record_fetch_failure_is_an_error() {
        let client = client_with(vec![CIDS, ("/pug_view/data/compound/", Route::Status(503))]);
        assert!(matches!(fetch(&client, "aspirin"), Err(EngineError::Rest(_))));
    }
}
