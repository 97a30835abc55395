//! Data models for compound exploration.
//!
//! These types mirror the shapes the remote database returns, not an idealized
//! chemistry model: every property is optional, identifiers are opaque numeric
//! keys, and structure payloads are unparsed text. Absent values are carried as
//! `None` and only coerced to placeholders at presentation time.

pub mod compound;
pub mod structure;

pub use compound::{Cid, PropertyRecord};
pub use structure::StructureFile;
