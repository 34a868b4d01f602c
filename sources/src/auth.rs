//! Authentication module.
//!

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Describe the possible ways to authenticate oneself
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Auth {
    /// Nothing special, no auth
    #[default]
    Anon,
    /// Using an API key supplied through a header, with the host header tied to it
    Key { api_key: String, api_host: String },
}

impl Display for Auth {
    /// Obfuscate the API key
    ///
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Hide API keys
        //
        let auth = match self.clone() {
            Auth::Key { api_host, .. } => Auth::Key {
                api_key: "HIDDEN".to_string(),
                api_host,
            },
            _ => Auth::Anon,
        };
        write!(f, "{:?}", auth)
    }
}
