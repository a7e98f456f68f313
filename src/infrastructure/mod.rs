//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`memory`] - Process-local registries backed by ordered vectors
//!
//! Persistence across restarts is out of scope; a catalog lives as long as
//! the [`crate::state::Catalog`] that owns it.

pub mod memory;
