//! Shape A: the provider's positional state arrays.
//!
//! Each aircraft comes as one heterogeneous array indexed by fixed offsets.  The array
//! is decoded exactly once into a named struct; nothing downstream ever touches raw
//! indices.
//!

use serde_json::Value;

use crate::common::{num_from, str_from};
use crate::Contact;
use crate::Position;

/// Field offsets inside a positional entry.
///
pub mod offset {
    /// Latitude in degrees
    pub const LATITUDE: usize = 2;
    /// Longitude in degrees
    pub const LONGITUDE: usize = 3;
    /// Barometric altitude in feet
    pub const ALTITUDE: usize = 5;
    /// Ground speed in knots; the provider packs the track angle into the same slot
    pub const GROUNDSPEED: usize = 6;
    /// Track angle in degrees (shared slot, see [GROUNDSPEED])
    pub const TRACK: usize = 6;
    /// Callsign, second fallback
    pub const CALLSIGN_FALLBACK2: usize = 8;
    /// Aircraft type designator
    pub const TYPE_CODE: usize = 9;
    /// Registration; doubles as the first callsign fallback
    pub const REGISTRATION: usize = 10;
    /// Origin airport code
    pub const ORIGIN: usize = 12;
    /// Destination airport code
    pub const DESTINATION: usize = 13;
    /// Callsign as filed
    pub const CALLSIGN: usize = 14;
}

/// One positional entry with named fields.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionalEntry {
    pub callsign: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub altitude: i64,
    pub speed_kt: f64,
    pub track: Option<f64>,
    pub type_code: Option<String>,
    pub registration: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl PositionalEntry {
    /// Decode one raw array.  Missing, null or mistyped slots degrade to the documented
    /// defaults; entries shorter than an accessed offset behave like missing slots.
    ///
    pub fn decode(raw: &[Value]) -> Self {
        // Filed callsign first, then registration, then the transponder ident.
        //
        let callsign = str_from(raw.get(offset::CALLSIGN))
            .or_else(|| str_from(raw.get(offset::REGISTRATION)))
            .or_else(|| str_from(raw.get(offset::CALLSIGN_FALLBACK2)));

        PositionalEntry {
            callsign,
            origin: str_from(raw.get(offset::ORIGIN)),
            destination: str_from(raw.get(offset::DESTINATION)),
            altitude: num_from(raw.get(offset::ALTITUDE)).unwrap_or(0.) as i64,
            speed_kt: num_from(raw.get(offset::GROUNDSPEED)).unwrap_or(0.),
            track: num_from(raw.get(offset::TRACK)),
            type_code: str_from(raw.get(offset::TYPE_CODE)),
            registration: str_from(raw.get(offset::REGISTRATION)),
            latitude: num_from(raw.get(offset::LATITUDE)).unwrap_or(0.),
            longitude: num_from(raw.get(offset::LONGITUDE)).unwrap_or(0.),
        }
    }
}

impl From<&PositionalEntry> for Contact {
    fn from(entry: &PositionalEntry) -> Self {
        Contact {
            callsign: entry.callsign.clone(),
            origin: entry.origin.clone(),
            destination: entry.destination.clone(),
            altitude: entry.altitude,
            speed_kt: entry.speed_kt,
            track: entry.track,
            type_code: entry.type_code.clone(),
            registration: entry.registration.clone(),
            position: Position::new(entry.latitude, entry.longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(v: Value) -> Vec<Value> {
        v.as_array().unwrap().clone()
    }

    #[test]
    fn test_decode_full_entry() {
        let entry = PositionalEntry::decode(&raw(json!([
            "hex", 1, 33.9, -84.3, "x", 12000, 90, "x", "ident", "B738", "N123AB", "x", "ATL",
            "JFK", "DAL202"
        ])));

        assert_eq!(Some("DAL202".to_string()), entry.callsign);
        assert_eq!(Some("ATL".to_string()), entry.origin);
        assert_eq!(Some("JFK".to_string()), entry.destination);
        assert_eq!(12000, entry.altitude);
        assert_eq!(90., entry.speed_kt);
        assert_eq!(Some(90.), entry.track);
        assert_eq!(Some("B738".to_string()), entry.type_code);
        assert_eq!(Some("N123AB".to_string()), entry.registration);
        assert_eq!(33.9, entry.latitude);
        assert_eq!(-84.3, entry.longitude);
    }

    #[test]
    fn test_decode_callsign_fallback_registration() {
        let entry = PositionalEntry::decode(&raw(json!([
            null, null, 33.9, -84.3, null, 5000, 90, null, "ident", null, "N123AB", null, null,
            null, null
        ])));

        assert_eq!(Some("N123AB".to_string()), entry.callsign);
    }

    #[test]
    fn test_decode_callsign_fallback_ident() {
        let entry = PositionalEntry::decode(&raw(json!([
            null, null, 33.9, -84.3, null, 5000, 90, null, "ident", null, "", null, null, null, ""
        ])));

        assert_eq!(Some("ident".to_string()), entry.callsign);
    }

    #[test]
    fn test_decode_callsign_exhausted() {
        let entry = PositionalEntry::decode(&raw(json!([
            null, null, 33.9, -84.3, null, 5000, 90, null, "", null, "", null, null, null, null
        ])));

        assert_eq!(None, entry.callsign);
    }

    #[test]
    fn test_decode_short_entry() {
        let entry = PositionalEntry::decode(&raw(json!([null, null, 33.9])));

        assert_eq!(None, entry.callsign);
        assert_eq!(0, entry.altitude);
        assert_eq!(0., entry.speed_kt);
        assert_eq!(None, entry.track);
        assert_eq!(33.9, entry.latitude);
        assert_eq!(0., entry.longitude);
    }

    #[test]
    fn test_decode_empty_entry() {
        let entry = PositionalEntry::decode(&[]);

        assert_eq!(PositionalEntry::default(), entry);
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let entry = PositionalEntry::decode(&raw(json!([
            null, null, "33.9", "-84.3", null, "5000", "90", null, null, null, null, null, null,
            null, null
        ])));

        assert_eq!(5000, entry.altitude);
        assert_eq!(90., entry.speed_kt);
        assert_eq!(33.9, entry.latitude);
        assert_eq!(-84.3, entry.longitude);
    }
}
