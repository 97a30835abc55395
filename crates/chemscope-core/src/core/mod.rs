//! # Core Module
//!
//! This module provides the fundamental building blocks for compound data
//! exploration: the data models exchanged with the remote database and the
//! REST plumbing used to reach it.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Data Models** ([`models`]) - Compound identifiers, property records, and
//!   structure payloads, with deserialization matching the remote wire formats.
//! - **REST Plumbing** ([`rest`]) - The blocking transport seam, endpoint URL
//!   construction, and the error taxonomy for remote calls.
//!
//! Everything here is stateless; nothing caches, retries, or persists.

pub mod models;
pub mod rest;
