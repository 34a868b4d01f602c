//! Module to deal with the remote data provider we fetch snapshots from.
//!
//! The submodules cover the two concerns a provider has:
//!
//! - authentication (API key and its tied host header)
//! - fetching data for the configured bounding box.
//!

use std::fmt::Debug;

use async_trait::async_trait;

use skywatch_common::BB;

// Re-export these modules for a shorter import path.
//
pub use access::*;
pub use auth::*;
pub use error::*;
pub use site::*;

mod access;
mod auth;
mod error;
mod site;

/// This trait enables us to manage different ways of connecting and fetching data under
/// a single interface.
///
#[async_trait]
pub trait Fetchable: Debug {
    /// Return source's name
    fn name(&self) -> String;
    /// Fetch one raw snapshot for the given bounding box
    async fn fetch(&self, bb: &BB) -> Result<String, FetchError>;
}

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
