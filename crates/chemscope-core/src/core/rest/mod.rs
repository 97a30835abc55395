//! REST plumbing for the remote compound database.
//!
//! All remote traffic goes through the [`Transport`](client::Transport) seam:
//! a single blocking `GET` returning the response body as text. The production
//! implementation is a thin wrapper over a blocking HTTP client; tests inject
//! canned transports so every lookup is exercised without a network. URL
//! construction lives in [`endpoints`] so the exact request shapes are
//! assertable in isolation.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::{PugClient, Transport};
pub use endpoints::Endpoints;
pub use error::RestError;
