//! Bounding box module.
//!
//! The watch area is a rectangle around the home point, either given explicitly through
//! its southwest/northeast corners or derived from a distance in nautical miles.
//!

use serde::{Deserialize, Serialize};
use tracing::trace;

/// one degree is circumference of earth / 360°, convert into nautical miles
const ONE_DEG_NM: f64 = (40_000. / 1.852) / 360.;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BB {
    /// Longitude - X0
    pub min_lon: f64,
    /// Latitude - Y0
    pub min_lat: f64,
    /// Longitude - X1
    pub max_lon: f64,
    /// Latitude - Y1
    pub max_lat: f64,
}

impl BB {
    /// Build a bounding box from its southwest and northeast corners.
    ///
    pub fn from_corners(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Take a lat lon tuple and create a bounding box of `dist` nautical miles away
    ///
    /// So from (lat, lon) we generate the following bounding box:
    /// (lat - dist, lon - dist, lat + dist, lon + dist)
    ///
    /// NOTE: `dist` is in Nautical Miles
    ///
    #[tracing::instrument]
    pub fn from_lat_lon(lat: f64, lon: f64, dist: u32) -> Self {
        trace!("box {dist}nm around ({lat}, {lon})");

        let dist = dist as f64 / ONE_DEG_NM;

        // Calculate the four corners
        //
        let (min_lat, max_lat) = (lat - dist, lat + dist);
        let (min_lon, max_lon) = (lon - dist, lon + dist);

        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[inline]
    fn shorten(v: f64) -> String {
        format!("{:.3}", v)
    }

    #[rstest]
    #[case(54.7, - 6.2, 25, "54.283", "-6.617", "55.117", "-5.783")]
    #[case(50.8, 4.4, 25, "50.383", "3.983", "51.217", "4.817")]
    fn test_bb_from_lat_lon(
        #[case] lat: f64,
        #[case] lon: f64,
        #[case] dist: u32,
        #[case] min_lat: &str,
        #[case] min_lon: &str,
        #[case] max_lat: &str,
        #[case] max_lon: &str,
    ) {
        let bb = BB::from_lat_lon(lat, lon, dist);

        assert_eq!(min_lon, shorten(bb.min_lon));
        assert_eq!(min_lat, shorten(bb.min_lat));
        assert_eq!(max_lon, shorten(bb.max_lon));
        assert_eq!(max_lat, shorten(bb.max_lat));
    }

    #[test]
    fn test_bb_from_corners() {
        let bb = BB::from_corners(33.8, -84.5, 34.1, -84.2);

        assert_eq!(33.8, bb.min_lat);
        assert_eq!(-84.5, bb.min_lon);
        assert_eq!(34.1, bb.max_lat);
        assert_eq!(-84.2, bb.max_lon);
    }
}
