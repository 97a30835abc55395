//! # Workflows Module
//!
//! High-level entry points tying the lookup operations into the complete
//! per-compound exploration pipeline. This is the one layer where the
//! degrade-to-default policy is applied: similarity and safety failures fall
//! back to an empty list and a fixed message, a property failure makes the
//! whole compound "not found", and only the 3D structure path carries its
//! error out to the caller for display.

pub mod explore;

pub use explore::{CompoundReport, explore};
