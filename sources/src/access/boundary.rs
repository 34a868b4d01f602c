//! Bounding-box flight list provider.
//!
//! One query shape: `GET {base_url}{route}` with the box corners as query parameters
//! and the credentials in `x-rapidapi-*` headers.  The route can be polled repeatedly;
//! every call returns a full snapshot for the area.
//!

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, trace};

use skywatch_common::BB;

use crate::{Auth, FetchError, Fetchable, Site};

/// Default route under the base URL
const DEF_ROUTE: &str = "/flights/list-in-boundary";

/// This is the boundary client/source struct.
///
#[derive(Clone, Debug, Default)]
pub struct BoundarySource {
    /// Base site url taken from config
    pub base_url: String,
    /// Add this to `base_url` to fetch data
    pub route: String,
    /// API key
    api_key: String,
    /// Host header tied to the key
    api_host: String,
    /// reqwest client
    client: Client,
}

impl BoundarySource {
    pub fn new() -> Self {
        BoundarySource {
            route: DEF_ROUTE.to_string(),
            client: Client::new(),
            ..Default::default()
        }
    }

    /// Load the endpoint definition from in-memory loaded config.
    ///
    #[tracing::instrument(skip(site))]
    pub fn load(mut self, site: &Site) -> Result<Self, FetchError> {
        trace!("boundary::load");

        self.base_url = site.base_url.clone();
        if let Some(route) = &site.route {
            self.route = route.clone();
        }
        match &site.auth {
            Some(Auth::Key { api_key, api_host }) => {
                self.api_key = api_key.clone();
                self.api_host = api_host.clone();
                Ok(self)
            }
            _ => Err(FetchError::NoApiKey),
        }
    }

    /// Full query URL for a bounding box.
    ///
    fn query_url(&self, bb: &BB) -> String {
        format!(
            "{}{}?bl_lat={}&bl_lng={}&tr_lat={}&tr_lng={}",
            self.base_url, self.route, bb.min_lat, bb.min_lon, bb.max_lat, bb.max_lon
        )
    }
}

#[async_trait]
impl Fetchable for BoundarySource {
    fn name(&self) -> String {
        "boundary".to_string()
    }

    /// Single call API
    ///
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, bb: &BB) -> Result<String, FetchError> {
        trace!("boundary::fetch");

        let url = self.query_url(bb);
        debug!("FetchURL: {}", url);

        let resp = self
            .client
            .get(&url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await?;

        // Check status
        //
        match resp.status() {
            StatusCode::OK => trace!("OK"),
            code => return Err(FetchError::Status(code)),
        }

        trace!("Fetching raw data");
        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site {
            base_url: "https://api.example.net".to_string(),
            auth: Some(Auth::Key {
                api_key: "k".to_string(),
                api_host: "api.example.net".to_string(),
            }),
            route: None,
        }
    }

    #[test]
    fn test_load() {
        let src = BoundarySource::new().load(&site()).unwrap();

        assert_eq!("https://api.example.net", src.base_url);
        assert_eq!(DEF_ROUTE, src.route);
    }

    #[test]
    fn test_load_custom_route() {
        let mut site = site();
        site.route = Some("/v2/boundary".to_string());
        let src = BoundarySource::new().load(&site).unwrap();

        assert_eq!("/v2/boundary", src.route);
    }

    #[test]
    fn test_load_no_key() {
        let mut site = site();
        site.auth = None;

        assert!(matches!(
            BoundarySource::new().load(&site),
            Err(FetchError::NoApiKey)
        ));
    }

    #[test]
    fn test_query_url() {
        let src = BoundarySource::new().load(&site()).unwrap();
        let bb = BB::from_corners(33.8, -84.5, 34.1, -84.2);

        assert_eq!(
            "https://api.example.net/flights/list-in-boundary?bl_lat=33.8&bl_lng=-84.5&tr_lat=34.1&tr_lng=-84.2",
            src.query_url(&bb)
        );
    }
}
