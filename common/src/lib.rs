//! This library is there to share some common code amongst all skywatch crates.
//!

mod config;
mod location;
mod logging;
mod macros;

pub use config::*;
pub use location::*;
pub use logging::*;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
