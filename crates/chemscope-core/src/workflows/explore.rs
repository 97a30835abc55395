use crate::core::models::{PropertyRecord, StructureFile};
use crate::core::rest::PugClient;
use crate::engine::error::EngineError;
use crate::engine::{properties, safety, similar, structure};
use tracing::{debug, info, instrument, warn};

/// The assembled result of one compound exploration.
///
/// Produced fresh per lookup and discarded after rendering; nothing is cached
/// between explorations. `properties: None` means the compound could not be
/// resolved at all — by design the report does not say why.
#[derive(Debug)]
pub struct CompoundReport {
    /// The name the pipeline was run for (post-suggestion-selection).
    pub query: String,
    /// The property record, or `None` when the compound was not found.
    pub properties: Option<PropertyRecord>,
    /// Up to five similar compound titles; empty on any similarity failure.
    pub similar: Vec<String>,
    /// Hazard summary, or the fixed fallback message.
    pub safety: String,
    /// The 3D structure outcome. `None` when the pipeline never ran (compound
    /// not found); the `Err` detail is surfaced verbatim by the renderer.
    pub structure: Option<Result<StructureFile, EngineError>>,
}

impl CompoundReport {
    /// A report for a compound the remote service could not resolve.
    fn not_found(query: &str) -> Self {
        Self {
            query: query.to_string(),
            properties: None,
            similar: Vec::new(),
            safety: safety::NO_SAFETY_DATA.to_string(),
            structure: None,
        }
    }

    /// Whether the property lookup succeeded.
    pub fn is_found(&self) -> bool {
        self.properties.is_some()
    }

    /// The best display name: record title, falling back to the query text.
    pub fn display_name(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|record| record.title.as_deref())
            .unwrap_or(&self.query)
    }
}

/// Runs the complete exploration pipeline for one compound name.
///
/// Sequential and blocking: properties first, then similarity, safety, and
/// the 3D structure. A failed property lookup short-circuits the rest (no
/// chart data, no structure panel), mirroring the "not found" early return of
/// the presentation layer. Similarity and safety failures degrade to their
/// defaults here; the structure result is kept as-is so the renderer can show
/// the failure detail.
///
/// Two-compound comparison is two independent calls; a failure in one never
/// affects the other.
#[instrument(skip_all, name = "explore_workflow")]
pub fn explore(client: &PugClient, name: &str) -> CompoundReport {
    let record = match properties::fetch(client, name) {
        Ok(record) => record,
        Err(error) => {
            info!("property lookup for '{name}' failed: {error}");
            return CompoundReport::not_found(name);
        }
    };
    debug!(
        title = record.title.as_deref().unwrap_or(name),
        "property record fetched"
    );

    let similar = similar::fetch(client, &record).unwrap_or_else(|error| {
        warn!("similarity search for '{name}' failed: {error}");
        Vec::new()
    });

    let safety = match safety::fetch(client, name) {
        Ok(Some(text)) => text,
        Ok(None) => safety::NO_SAFETY_DATA.to_string(),
        Err(error) => {
            warn!("safety lookup for '{name}' failed: {error}");
            safety::NO_SAFETY_DATA.to_string()
        }
    };

    let structure = structure::fetch(client, name);
    if let Err(error) = &structure {
        warn!("3D structure lookup for '{name}' failed: {error}");
    }

    CompoundReport {
        query: name.to_string(),
        properties: Some(record),
        similar,
        safety,
        structure: Some(structure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rest::client::testing::{Route, client_with};

    const PROPERTIES: &str = r#"{
        "PropertyTable": {
            "Properties": [{
                "MolecularFormula": "H2O",
                "MolecularWeight": "18.015",
                "CanonicalSMILES": "O",
                "InChIKey": "XLYOFNOQVPJJNP-UHFFFAOYSA-N",
                "XLogP": -0.5,
                "HBondDonorCount": 1,
                "HBondAcceptorCount": 1,
                "Title": "Water"
            }]
        }
    }"#;

    const RANGE: &str = r#"{"PropertyTable":{"Properties":[
        {"Title":"Water"},
        {"Title":"Ammonia"},
        {"Title":"Methane"}
    ]}}"#;

    const CIDS: &str = r#"{"IdentifierList":{"CID":[962]}}"#;

    const VIEW: &str = r#"{"Record":{"Section":[
        {"TOCHeading":"Safety and Hazards","Information":[
            {"Value":{"StringWithMarkup":[{"String":"Non-flammable."}]}}
        ]}
    ]}}"#;

    #[test]
    fn full_pipeline_assembles_every_section() {
        let client = client_with(vec![
            ("MolecularWeight=", Route::Body(RANGE)),
            ("/property/", Route::Body(PROPERTIES)),
            ("/cids/JSON", Route::Body(CIDS)),
            ("/pug_view/", Route::Body(VIEW)),
            ("record/SDF", Route::Body("sdf-payload\n$$$$\n")),
        ]);

        let report = explore(&client, "water");
        assert!(report.is_found());
        assert_eq!(report.display_name(), "Water");
        assert_eq!(report.similar, vec!["Ammonia", "Methane"]);
        assert_eq!(report.safety, "Non-flammable.");
        let structure = report.structure.unwrap().unwrap();
        assert_eq!(structure.sdf, "sdf-payload\n$$$$\n");
    }

    #[test]
    fn not_found_short_circuits_every_other_lookup() {
        // Only the property route exists; the stub transport panics on any
        // other request, so reaching similarity/safety/structure would fail
        // this test.
        let client = client_with(vec![(
            "/property/",
            Route::Body(r#"{"PropertyTable":{"Properties":[]}}"#),
        )]);

        let report = explore(&client, "zzzqqqxx123");
        assert!(!report.is_found());
        assert_eq!(report.display_name(), "zzzqqqxx123");
        assert!(report.similar.is_empty());
        assert_eq!(report.safety, safety::NO_SAFETY_DATA);
        assert!(report.structure.is_none());
    }

    #[test]
    fn similarity_and_safety_failures_degrade_to_defaults() {
        let client = client_with(vec![
            ("/property/", Route::Body(PROPERTIES)),
            ("MolecularWeight=", Route::Status(503)),
            ("/cids/JSON", Route::Status(503)),
        ]);

        let report = explore(&client, "water");
        assert!(report.is_found());
        assert!(report.similar.is_empty());
        assert_eq!(report.safety, safety::NO_SAFETY_DATA);
        // Structure resolution shares the failing CID lookup.
        assert!(report.structure.unwrap().is_err());
    }

    #[test]
    fn structure_failure_detail_is_preserved_for_rendering() {
        let client = client_with(vec![
            ("/property/", Route::Body(PROPERTIES)),
            ("MolecularWeight=", Route::Body(RANGE)),
            ("/cids/JSON", Route::Body(CIDS)),
            ("/pug_view/", Route::Body(VIEW)),
            ("record/SDF", Route::Status(404)),
        ]);

        let report = explore(&client, "water");
        let error = report.structure.unwrap().unwrap_err();
        assert!(error.to_string().contains("404"));
    }
}
