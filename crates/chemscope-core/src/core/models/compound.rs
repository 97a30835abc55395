use serde::{Deserialize, Deserializer};
use std::fmt;

/// The remote database's internal numeric key for a compound.
///
/// CIDs are resolved from free-text names and are only meaningful to the
/// remote service; the library never derives or validates them locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Cid(pub u64);

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of molecular attributes returned for one compound.
///
/// Every field is optional: the remote service omits attributes it cannot
/// compute (e.g. XLogP for ions), and a record with only a subset of fields is
/// still a valid lookup result. The field names and their serialized forms
/// follow the remote property table exactly, including the quirk that the
/// molecular weight is serialized as a *string*.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertyRecord {
    /// Empirical formula string (e.g. "H2O").
    #[serde(rename = "MolecularFormula")]
    pub molecular_formula: Option<String>,
    /// Molecular weight in g/mol. Accepts both string and numeric encodings.
    #[serde(
        rename = "MolecularWeight",
        default,
        deserialize_with = "f64_from_string_or_number"
    )]
    pub molecular_weight: Option<f64>,
    /// Canonical SMILES structure notation.
    #[serde(rename = "CanonicalSMILES")]
    pub canonical_smiles: Option<String>,
    /// Unique structure hash (InChIKey).
    #[serde(rename = "InChIKey")]
    pub inchikey: Option<String>,
    /// Computed octanol/water partition coefficient (lipophilicity).
    #[serde(rename = "XLogP")]
    pub xlogp: Option<f64>,
    /// Hydrogen-bond donor count.
    #[serde(rename = "HBondDonorCount")]
    pub hbond_donor_count: Option<u32>,
    /// Hydrogen-bond acceptor count.
    #[serde(rename = "HBondAcceptorCount")]
    pub hbond_acceptor_count: Option<u32>,
    /// The preferred display name for the compound.
    #[serde(rename = "Title")]
    pub title: Option<String>,
}

impl PropertyRecord {
    /// Returns the molecular weight, coerced to `0.0` when absent.
    ///
    /// This is the value the similarity search windows over; the remote range
    /// query tolerates a zero lower bound, so absence degrades to `[0, 10]`.
    pub fn weight_or_zero(&self) -> f64 {
        self.molecular_weight.unwrap_or(0.0)
    }

    /// Returns the four chartable numeric attributes in display order.
    ///
    /// Absent values are coerced to `0.0` so the chart never fails on a
    /// partial record. Order: molecular weight, XLogP, H-bond donors,
    /// H-bond acceptors.
    pub fn chart_values(&self) -> [f64; 4] {
        [
            self.molecular_weight.unwrap_or(0.0),
            self.xlogp.unwrap_or(0.0),
            f64::from(self.hbond_donor_count.unwrap_or(0)),
            f64::from(self.hbond_acceptor_count.unwrap_or(0)),
        ]
    }
}

/// Deserializes an optional float that the wire may encode as a JSON string.
fn f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
