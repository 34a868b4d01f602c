//! Shape-independent intermediate contact and the single enrichment step.
//!
//! Both input shapes decode into a `Contact` first, so the mapping rules (altitude
//! floor, fallback defaults, derived fields) live in exactly one place.
//!

use tracing::trace;

use crate::{
    cardinal_from_bearing, classify_track, distance_miles, initial_bearing, resolve_type,
    AircraftRecord, Observer, Position,
};

/// Knots to statute miles per hour
const KT_TO_MPH: f64 = 1.151;

/// What both input shapes boil down to before enrichment.  Fields carry the provider's
/// values as-is; the documented defaults are applied while building the record.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contact {
    pub callsign: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// Barometric altitude in feet
    pub altitude: i64,
    /// Ground speed in knots
    pub speed_kt: f64,
    /// Reported track angle, `None` when absent or unparseable
    pub track: Option<f64>,
    pub type_code: Option<String>,
    pub registration: Option<String>,
    pub position: Position,
}

impl Contact {
    /// Apply the altitude floor and derive the canonical record.  Ground-level contacts
    /// yield `None` and are never reported.
    ///
    pub fn into_record(self, observer: &Observer) -> Option<AircraftRecord> {
        if self.altitude < observer.floor_ft {
            trace!("below {}ft, dropped", observer.floor_ft);
            return None;
        }

        let callsign = self
            .callsign
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "-".to_string());
        let origin = self.origin.unwrap_or_else(|| "-".to_string());
        let destination = self.destination.unwrap_or_else(|| "-".to_string());
        let type_code = self.type_code.unwrap_or_else(|| "-".to_string());
        let type_desc = resolve_type(&type_code);
        let reg = self.registration.unwrap_or_else(|| "-".to_string());

        let bearing = initial_bearing(observer.home, self.position);

        Some(AircraftRecord {
            callsign,
            route: format!("{}->{}", origin, destination),
            alt: self.altitude,
            spd_kt: self.speed_kt,
            spd_mph: (self.speed_kt * KT_TO_MPH).floor() as i64,
            type_code,
            type_desc,
            reg,
            lat: self.position.latitude,
            lng: self.position.longitude,
            heading: classify_track(self.track),
            location: cardinal_from_bearing(Some(bearing)).to_string(),
            distance_miles: distance_miles(observer.home, self.position),
        })
    }
}
