//! # Engine Module
//!
//! One module per remote lookup operation. Each operation is a single
//! request/decode/extract sequence against the [`PugClient`](crate::core::rest::PugClient)
//! and returns a typed error rather than a silent default; the decision to
//! degrade (empty list, fallback string, "not found") belongs to the
//! [`workflows`](crate::workflows) layer so it happens in exactly one place.
//!
//! - [`suggestions`] - autocomplete candidates for a partial name
//! - [`resolve`] - free-text name to internal identifier
//! - [`properties`] - the fixed molecular property set for a name
//! - [`safety`] - first hazard summary string from the structured record
//! - [`similar`] - titles within a ±10 g/mol window of a record's weight
//! - [`structure`] - the 3D SDF payload for a name

pub mod error;
pub mod properties;
pub mod resolve;
pub mod safety;
pub mod similar;
pub mod structure;
pub mod suggestions;

pub use error::EngineError;
