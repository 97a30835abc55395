use crate::core::models::PropertyRecord;
use crate::core::rest::PugClient;
use crate::engine::error::EngineError;
use serde::Deserialize;
use std::collections::HashSet;

/// Cap on the number of similarity results returned.
pub const MAX_SIMILAR: usize = 5;

/// Half-width of the molecular weight window, in g/mol.
const WINDOW_HALF_WIDTH: f64 = 10.0;

#[derive(Debug, Deserialize)]
struct RangeResponse {
    #[serde(rename = "PropertyTable")]
    property_table: Option<RangeTable>,
}

#[derive(Debug, Deserialize)]
struct RangeTable {
    #[serde(rename = "Properties", default)]
    rows: Vec<RangeRow>,
}

#[derive(Debug, Deserialize)]
struct RangeRow {
    #[serde(rename = "Title")]
    title: Option<String>,
}

/// The weight window searched for a given molecular weight.
///
/// Always `[max(0, weight - 10), weight + 10]`; a record with no weight
/// searches `[0, 10]`.
pub fn mass_window(weight: f64) -> (f64, f64) {
    ((weight - WINDOW_HALF_WIDTH).max(0.0), weight + WINDOW_HALF_WIDTH)
}

/// Fetches up to [`MAX_SIMILAR`] compound titles near a record's weight.
///
/// Queries the weight-range search over the window around
/// [`PropertyRecord::weight_or_zero`], then deduplicates titles
/// case-insensitively and drops the queried compound's own title
/// (case-insensitive). Result order is the remote service's; no sort is
/// applied.
///
/// # Errors
///
/// Returns an error on transport failure or a malformed response body.
pub fn fetch(client: &PugClient, record: &PropertyRecord) -> Result<Vec<String>, EngineError> {
    let (lower, upper) = mass_window(record.weight_or_zero());
    let url = client.endpoints().properties_for_weight_range(lower, upper);
    let response: RangeResponse = client.get_json(&url)?;

    let own_title = record
        .title
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    let mut seen = HashSet::new();
    let mut titles = Vec::new();
    for row in response
        .property_table
        .map(|table| table.rows)
        .unwrap_or_default()
    {
        let Some(title) = row.title else { continue };
        let key = title.to_lowercase();
        if key == own_title || !seen.insert(key) {
            continue;
        }
        titles.push(title);
        if titles.len() == MAX_SIMILAR {
            break;
        }
    }

    Ok(titles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rest::client::testing::{Route, client_with};

    fn record(title: &str, weight: f64) -> PropertyRecord {
        PropertyRecord {
            title: Some(title.to_string()),
            molecular_weight: Some(weight),
            ..Default::default()
        }
    }

    fn rows(titles: &[&str]) -> String {
        let rows: Vec<String> = titles
            .iter()
            .map(|t| format!(r#"{{"CID":1,"MolecularWeight":"18.0","Title":"{t}"}}"#))
            .collect();
        format!(r#"{{"PropertyTable":{{"Properties":[{}]}}}}"#, rows.join(","))
    }

    #[test]
    fn mass_window_is_symmetric_and_floored_at_zero() {
        assert_eq!(mass_window(18.0), (8.0, 28.0));
        assert_eq!(mass_window(4.0), (0.0, 14.0));
        assert_eq!(mass_window(0.0), (0.0, 10.0));
    }

    #[test]
    fn excludes_own_title_case_insensitively() {
        let body = rows(&["WATER", "Heavy water", "Methane"]);
        let leaked: &'static str = Box::leak(body.into_boxed_str());
        let client = client_with(vec![("MolecularWeight=", Route::Body(leaked))]);

        let titles = fetch(&client, &record("Water", 18.015)).unwrap();
        assert_eq!(titles, vec!["Heavy water", "Methane"]);
    }

    #[test]
    fn deduplicates_titles_and_caps_at_five() {
        let body = rows(&[
            "Ammonia", "ammonia", "Methane", "Neon", "Water", "Borane", "Diborane", "Silane",
        ]);
        let leaked: &'static str = Box::leak(body.into_boxed_str());
        let client = client_with(vec![("MolecularWeight=", Route::Body(leaked))]);

        let titles = fetch(&client, &record("Water", 18.015)).unwrap();
        assert_eq!(titles.len(), MAX_SIMILAR);
        assert_eq!(titles, vec!["Ammonia", "Methane", "Neon", "Borane", "Diborane"]);
    }

    #[test]
    fn absent_weight_searches_the_zero_window() {
        let client = client_with(vec![(
            "MolecularWeight=0-10",
            Route::Body(r#"{"PropertyTable":{"Properties":[]}}"#),
        )]);

        let titles = fetch(&client, &PropertyRecord::default()).unwrap();
        assert!(titles.is_empty());
    }

    #[test]
    fn remote_failure_is_an_error_not_a_default() {
        let client = client_with(vec![("MolecularWeight=", Route::Status(504))]);
        assert!(fetch(&client, &record("Water", 18.015)).is_err());
    }
}
