//! Data loading and view derivations for the supply-chain globe.
//!
//! The loader fetches one immutable [`loader::Snapshot`] per session; every
//! render pass then derives frames from that snapshot and the current
//! [`view::ViewState`]. No derivation keeps state between calls.

pub mod dashboard;
pub mod globe;
pub mod loader;
pub mod view;
