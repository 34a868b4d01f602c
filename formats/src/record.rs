//! The canonical aircraft record, shared output of both input shapes.
//!

use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};

/// One enriched airborne contact.  Every numeric value is rendered as a string in the
/// persisted JSON, which is the form the read API serves.
///
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AircraftRecord {
    /// Trimmed callsign, `-` when the provider sent none
    pub callsign: String,
    /// `ORIGIN->DEST` airport pair
    pub route: String,
    /// Barometric altitude in feet
    #[serde_as(as = "DisplayFromStr")]
    pub alt: i64,
    /// Ground speed in knots
    #[serde_as(as = "DisplayFromStr")]
    pub spd_kt: f64,
    /// Ground speed in mph, `floor(spd_kt * 1.151)`
    #[serde_as(as = "DisplayFromStr")]
    pub spd_mph: i64,
    /// Raw type designator; only the resolved description below is persisted
    #[serde(skip)]
    pub type_code: String,
    /// Resolved type description, or the raw code when unknown
    #[serde(rename = "type")]
    pub type_desc: String,
    /// Registration / tail number
    pub reg: String,
    /// Latitude in degrees
    #[serde_as(as = "DisplayFromStr")]
    pub lat: f64,
    /// Longitude in degrees
    #[serde_as(as = "DisplayFromStr")]
    pub lng: f64,
    /// Long-form track direction, or `N/A`
    pub heading: String,
    /// Where the aircraft sits relative to home, abbreviated
    pub location: String,
    /// Great-circle distance from home in statute miles
    #[serde_as(as = "DisplayFromStr")]
    pub distance_miles: f64,
}
