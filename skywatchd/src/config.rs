//! Daemon configuration, read from `config.hcl`.
//!

use std::path::PathBuf;

use serde::Deserialize;

use skywatch_common::{Versioned, BB};
use skywatch_formats::{Observer, Position, DEF_FLOOR_FT};
use skywatch_sources::Site;

/// Current version of the config file format
const CVERSION: usize = 1;

/// Default interval between fetch cycles in seconds
const DEF_EVERY: u64 = 210;
/// Give up for good after this many failed cycles
const DEF_MAX_FAILURES: u32 = 10;
/// Default half-size of the watch box in nautical miles
const DEF_RANGE_NM: u32 = 13;
/// Default API port
const DEF_PORT: u16 = 45699;

/// Configuration for the daemon: the watch area, the scheduler parameters and the
/// provider endpoint.
///
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Version number for safety
    pub version: usize,
    /// Home reference point
    pub home: Home,
    /// Explicit box corners; takes precedence over `range_nm`
    pub boundary: Option<Corners>,
    /// Half-size of the watch box in nautical miles around home
    pub range_nm: Option<u32>,
    /// Ground altitude threshold in feet
    #[serde(default = "default_floor")]
    pub floor_ft: i64,
    /// Seconds between fetch cycles
    #[serde(default = "default_every")]
    pub every: u64,
    /// Cycles stop for good after this many failures
    #[serde(default = "default_max_failures")]
    pub max_failures: u32,
    /// Active window, local hours
    #[serde(default)]
    pub window: Window,
    /// API listening IP
    #[serde(default = "default_listen")]
    pub listen: String,
    /// API port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Override for the state directory
    pub state_dir: Option<PathBuf>,
    /// Provider endpoint & credentials
    pub site: Site,
}

/// The home reference point.
///
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Home {
    pub lat: f64,
    pub lng: f64,
}

/// Explicit corners of the watch box (southwest, northeast).
///
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Corners {
    pub bl_lat: f64,
    pub bl_lng: f64,
    pub tr_lat: f64,
    pub tr_lng: f64,
}

/// Active window in local hours, both bounds inclusive.
///
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Window {
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
}

impl Default for Window {
    fn default() -> Self {
        Window {
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
        }
    }
}

impl Config {
    /// The box we query the provider for.
    ///
    pub fn boundary(&self) -> BB {
        match (self.boundary, self.range_nm) {
            (Some(c), _) => BB::from_corners(c.bl_lat, c.bl_lng, c.tr_lat, c.tr_lng),
            (None, Some(dist)) => BB::from_lat_lon(self.home.lat, self.home.lng, dist),
            (None, None) => BB::from_lat_lon(self.home.lat, self.home.lng, DEF_RANGE_NM),
        }
    }

    /// Enrichment parameters derived from the config.
    ///
    pub fn observer(&self) -> Observer {
        Observer::new(Position::new(self.home.lat, self.home.lng), self.floor_ft)
    }
}

impl Versioned for Config {
    const VERSION: usize = CVERSION;

    fn version(&self) -> usize {
        self.version
    }
}

fn default_floor() -> i64 {
    DEF_FLOOR_FT
}

fn default_every() -> u64 {
    DEF_EVERY
}

fn default_max_failures() -> u32 {
    DEF_MAX_FAILURES
}

fn default_start_hour() -> u32 {
    12
}

fn default_end_hour() -> u32 {
    20
}

fn default_listen() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEF_PORT
}
