use super::compound::Cid;

/// A 3D structure record fetched for one compound.
///
/// The payload is the raw SDF text exactly as the remote service returned it.
/// It is never parsed or validated here; the viewer widget it is handed to is
/// the only consumer, and treats it as an opaque blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureFile {
    /// The identifier the structure was fetched for.
    pub cid: Cid,
    /// The SDF-format text blob with 3D coordinates.
    pub sdf: String,
}

impl StructureFile {
    pub fn new(cid: Cid, sdf: impl Into<String>) -> Self {
        Self {
            cid,
            sdf: sdf.into(),
        }
    }
}
