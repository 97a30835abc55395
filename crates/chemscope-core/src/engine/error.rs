use crate::core::rest::RestError;
use thiserror::Error;

/// Errors produced by the lookup operations.
///
/// Remote failures pass through transparently; the two named variants mark
/// well-formed responses that contain no usable result, so callers can render
/// a "not found" message distinct from nothing at all. The original behavior
/// of never distinguishing failure causes in the UI is preserved by the
/// workflow layer collapsing all of these to the same defaults.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Rest(#[from] RestError),

    /// The property table held no row for the requested name.
    #[error("compound '{name}' not found")]
    CompoundNotFound { name: String },

    /// Name resolution returned an empty identifier list.
    #[error("no identifier found for compound '{name}'")]
    NoIdentifier { name: String },
}
