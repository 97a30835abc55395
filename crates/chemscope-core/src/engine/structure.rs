use crate::core::models::StructureFile;
use crate::core::rest::PugClient;
use crate::engine::error::EngineError;
use crate::engine::resolve;

/// Fetches the 3D structure record for a compound name.
///
/// Two dependent requests: name-to-identifier resolution, then the SDF record
/// with 3D coordinates. Unlike every other lookup, callers of this one are
/// expected to *show* the error detail rather than substitute a default; the
/// returned errors carry displayable messages for that purpose.
///
/// # Errors
///
/// Returns an error when the name cannot be resolved or the structure record
/// cannot be fetched (including compounds with no 3D conformer, which the
/// service reports as a non-success status).
pub fn fetch(client: &PugClient, name: &str) -> Result<StructureFile, EngineError> {
    let cid = resolve::cid_for_name(client, name)?;
    let url = client.endpoints().structure_3d(cid);
    let sdf = client.get_text(&url)?;
    Ok(StructureFile::new(cid, sdf))
}
