use crate::core::models::PropertyRecord;
use phf::phf_map;

/// Placeholder rendered for absent property values.
pub const PLACEHOLDER: &str = "N/A";

/// Property table keys in display order.
pub const DISPLAY_ORDER: [&str; 7] = [
    "MolecularFormula",
    "MolecularWeight",
    "CanonicalSMILES",
    "InChIKey",
    "XLogP",
    "HBondDonorCount",
    "HBondAcceptorCount",
];

/// Display labels for the remote property table keys.
pub static FIELD_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "MolecularFormula" => "Molecular Formula",
    "MolecularWeight" => "Molecular Weight (g/mol)",
    "CanonicalSMILES" => "Canonical SMILES",
    "InChIKey" => "InChIKey",
    "XLogP" => "XLogP",
    "HBondDonorCount" => "H-Bond Donors",
    "HBondAcceptorCount" => "H-Bond Acceptors",
};

fn field_value(record: &PropertyRecord, key: &str) -> Option<String> {
    match key {
        "MolecularFormula" => record.molecular_formula.clone(),
        "MolecularWeight" => record.molecular_weight.map(|w| w.to_string()),
        "CanonicalSMILES" => record.canonical_smiles.clone(),
        "InChIKey" => record.inchikey.clone(),
        "XLogP" => record.xlogp.map(|x| x.to_string()),
        "HBondDonorCount" => record.hbond_donor_count.map(|c| c.to_string()),
        "HBondAcceptorCount" => record.hbond_acceptor_count.map(|c| c.to_string()),
        _ => None,
    }
}

/// The labeled property rows for one record, in display order.
///
/// Absent fields are rendered as [`PLACEHOLDER`] rather than omitted, so the
/// table shape is identical for every compound.
pub fn display_rows(record: &PropertyRecord) -> Vec<(&'static str, String)> {
    DISPLAY_ORDER
        .iter()
        .map(|key| {
            let label = FIELD_LABELS.get(key).copied().unwrap_or(key);
            let value = field_value(record, key).unwrap_or_else(|| PLACEHOLDER.to_string());
            (label, value)
        })
        .collect()
}
