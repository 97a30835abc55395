//! # ChemScope Core Library
//!
//! A client library for exploring chemical compound data served by the PubChem
//! PUG REST services: autocomplete suggestions, molecular properties, hazard
//! summaries, similarity-by-weight search, and 3D structure records.
//!
//! ## Architectural Philosophy
//!
//! The library is designed as a strict layer stack so that every remote
//! interaction is testable without a network and every failure mode is an
//! explicit `Result`:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`PropertyRecord`,
//!   `StructureFile`), the REST transport seam, and endpoint URL construction.
//!
//! - **[`engine`]: The Lookup Layer.** One module per remote operation
//!   (suggestions, properties, safety, similar, structure). Each call returns a
//!   typed error instead of silently degrading, so callers decide the fallback.
//!
//! - **[`workflows`]: The Public API.** Ties the lookups together into the
//!   complete per-compound exploration pipeline, applying the documented
//!   degrade-to-default policy at exactly one place.
//!
//! - **[`render`]: The Presentation Layer.** Turns assembled reports into
//!   embeddable markup: property tables, an SVG bar chart, and a 3Dmol.js
//!   viewer fragment.

pub mod core;
pub mod engine;
pub mod render;
pub mod workflows;
