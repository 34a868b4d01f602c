//! Shape B: the provider's labeled per-aircraft objects.
//!
//! Every field is optional and lenient: a missing, null or mistyped value degrades to
//! `None` instead of failing the record or the whole snapshot.
//!

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::common::{num_from, str_from};
use crate::Contact;
use crate::Position;

/// One labeled entry as sent by the provider.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabeledEntry {
    #[serde(deserialize_with = "loose_str")]
    pub callsign: Option<String>,
    #[serde(deserialize_with = "loose_str")]
    pub origin: Option<String>,
    #[serde(deserialize_with = "loose_str")]
    pub destination: Option<String>,
    #[serde(deserialize_with = "loose_num")]
    pub altitude: Option<f64>,
    #[serde(deserialize_with = "loose_num")]
    pub track: Option<f64>,
    #[serde(deserialize_with = "loose_num")]
    pub speed: Option<f64>,
    #[serde(rename = "aircraftType", deserialize_with = "loose_str")]
    pub aircraft_type: Option<String>,
    #[serde(deserialize_with = "loose_str")]
    pub registration: Option<String>,
    #[serde(deserialize_with = "loose_num")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "loose_num")]
    pub longitude: Option<f64>,
}

/// Accept numbers and numeric strings, map everything else to `None`.
///
fn loose_num<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(num_from(v.as_ref()))
}

/// Accept non-empty strings and bare numbers, map everything else to `None`.
///
fn loose_str<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(str_from(v.as_ref()))
}

impl From<&LabeledEntry> for Contact {
    fn from(entry: &LabeledEntry) -> Self {
        Contact {
            callsign: entry.callsign.clone(),
            origin: entry.origin.clone(),
            destination: entry.destination.clone(),
            altitude: entry.altitude.unwrap_or(0.) as i64,
            speed_kt: entry.speed.unwrap_or(0.),
            track: entry.track,
            type_code: entry.aircraft_type.clone(),
            registration: entry.registration.clone(),
            position: Position::new(
                entry.latitude.unwrap_or(0.),
                entry.longitude.unwrap_or(0.),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_full() {
        let entry: LabeledEntry = serde_json::from_value(json!({
            "altitude": 5000,
            "track": 45,
            "callsign": "UAL123",
            "origin": "ORD",
            "destination": "DEN",
            "speed": 400,
            "aircraftType": "B738",
            "registration": "N456CD",
            "latitude": 41.9,
            "longitude": -87.9
        }))
        .unwrap();

        assert_eq!(Some("UAL123".to_string()), entry.callsign);
        assert_eq!(Some(5000.), entry.altitude);
        assert_eq!(Some(45.), entry.track);
        assert_eq!(Some(400.), entry.speed);
        assert_eq!(Some("B738".to_string()), entry.aircraft_type);
        assert_eq!(Some(41.9), entry.latitude);
        assert_eq!(Some(-87.9), entry.longitude);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let entry: LabeledEntry = serde_json::from_value(json!({})).unwrap();

        assert_eq!(LabeledEntry::default(), entry);
    }

    #[test]
    fn test_mistyped_fields_degrade() {
        let entry: LabeledEntry = serde_json::from_value(json!({
            "altitude": "abc",
            "track": "abc",
            "callsign": 42,
            "speed": null
        }))
        .unwrap();

        assert_eq!(None, entry.altitude);
        assert_eq!(None, entry.track);
        assert_eq!(Some("42".to_string()), entry.callsign);
        assert_eq!(None, entry.speed);
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let entry: LabeledEntry = serde_json::from_value(json!({
            "altitude": "5000",
            "speed": "400.5"
        }))
        .unwrap();

        assert_eq!(Some(5000.), entry.altitude);
        assert_eq!(Some(400.5), entry.speed);
    }

    #[test]
    fn test_into_contact_defaults() {
        let entry: LabeledEntry = serde_json::from_value(json!({})).unwrap();
        let contact = Contact::from(&entry);

        assert_eq!(0, contact.altitude);
        assert_eq!(0., contact.speed_kt);
        assert_eq!(None, contact.track);
        assert_eq!(Position::new(0., 0.), contact.position);
    }
}
