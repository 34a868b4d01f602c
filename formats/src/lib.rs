//! Definition of the provider data shapes.
//!
//! This module makes the link between the canonical output record `AircraftRecord` and
//! the two input shapes the provider is known to emit: positional state arrays under an
//! `"aircraft"` key and labeled objects under a `"data"` key.  The shape is decided once
//! per snapshot, each entry is decoded into a typed struct, and both shapes then go
//! through the same enrichment step.
//!

// Re-export for convenience
//
pub use actype::*;
pub use common::*;
pub use contact::*;
pub use geo::*;
pub use labeled::*;
pub use positional::*;
pub use record::*;
pub use snapshot::*;

mod actype;
mod common;
mod contact;
mod geo;
mod labeled;
mod positional;
mod record;
mod snapshot;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
