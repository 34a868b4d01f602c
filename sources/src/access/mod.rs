//! Access methods for the supported provider dialects.
//!

pub use boundary::*;

mod boundary;
