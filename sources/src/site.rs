//! Module that defines what a site (the provider API endpoint) is.
//!
//! This is used to configure the provider through `config.hcl`.  There is exactly one
//! query shape, the bounding-box flight list; only the endpoint location and the
//! credentials vary between deployments.
//!

use serde::{Deserialize, Serialize};

use crate::Auth;

/// Describe the provider endpoint and associated credentials.
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Site {
    /// Base URL (to avoid repeating)
    pub base_url: String,
    /// Credentials
    pub auth: Option<Auth>,
    /// Route below `base_url`, defaulting to the boundary query
    pub route: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_deserialize() {
        let s = r##"{"base_url": "https://api.example.net", "auth": {"api_key": "k", "api_host": "api.example.net"}}"##;
        let site: Site = serde_json::from_str(s).unwrap();

        assert_eq!("https://api.example.net", site.base_url);
        assert_eq!(
            Some(Auth::Key {
                api_key: "k".to_string(),
                api_host: "api.example.net".to_string(),
            }),
            site.auth
        );
        assert_eq!(None, site.route);
    }
}
