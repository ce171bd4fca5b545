//! Core types and pure derivations for the EU critical-material supply-chain globe.
//!
//! - [`classifier`]: bottleneck rules and location colors
//! - [`scale`]: point sizes, arc thicknesses, animation speeds, route colors
//! - [`disruption`]: scenario projection of the route set
//! - [`timeline`]: projected days of supply
//! - [`normalize`]: raw store rows into canonical [`model`] types
//!
//! With the `api` feature, [`rest`] reads the hosted store and [`explain`]
//! calls the explanation endpoint.

pub mod classifier;
pub mod disruption;
pub mod error;
pub mod impact;
pub mod model;
pub mod normalize;
pub mod records;
pub mod scale;
pub mod store;
pub mod timeline;

#[cfg(feature = "api")]
pub mod explain;
#[cfg(feature = "api")]
pub mod rest;

pub use error::{EucError, Result};
