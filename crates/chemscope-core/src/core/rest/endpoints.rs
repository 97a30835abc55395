use crate::core::models::Cid;

/// Default root of the PUG REST service family.
pub const DEFAULT_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest";

/// The fixed property field set requested for every compound lookup.
const PROPERTY_FIELDS: &str = "MolecularFormula,MolecularWeight,CanonicalSMILES,InChIKey,Title,XLogP,HBondDonorCount,HBondAcceptorCount";

/// Builds request URLs for the six remote operations.
///
/// The base URL is overridable so tests and mirrors can point the whole client
/// elsewhere; everything below the base follows the PUG REST, PUG View, and
/// autocomplete path conventions. Compound names are percent-encoded since
/// they are user-typed free text embedded in a path segment.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    /// Creates endpoint builders rooted at `base` (no trailing slash).
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Autocomplete dictionary lookup for a partial compound name.
    pub fn autocomplete(&self, query: &str) -> String {
        format!(
            "{}/autocomplete/compound/{}/json",
            self.base,
            urlencoding::encode(query)
        )
    }

    /// Name-to-identifier resolution.
    pub fn cids_for_name(&self, name: &str) -> String {
        format!(
            "{}/pug/compound/name/{}/cids/JSON",
            self.base,
            urlencoding::encode(name)
        )
    }

    /// Fixed-field property table lookup by compound name.
    pub fn properties_for_name(&self, name: &str) -> String {
        format!(
            "{}/pug/compound/name/{}/property/{}/JSON",
            self.base,
            urlencoding::encode(name),
            PROPERTY_FIELDS
        )
    }

    /// Weight-and-title property search over a molecular weight range.
    pub fn properties_for_weight_range(&self, lower: f64, upper: f64) -> String {
        format!(
            "{}/pug/compound/property/MolecularWeight,Title/JSON?MolecularWeight={}-{}",
            self.base, lower, upper
        )
    }

    /// Full structured record (PUG View) for a resolved identifier.
    pub fn record_view(&self, cid: Cid) -> String {
        format!("{}/pug_view/data/compound/{}/JSON", self.base, cid)
    }

    /// 3D structure record in SDF format for a resolved identifier.
    pub fn structure_3d(&self, cid: Cid) -> String {
        format!(
            "{}/pug/compound/cid/{}/record/SDF?record_type=3d",
            self.base, cid
        )
    }
}
