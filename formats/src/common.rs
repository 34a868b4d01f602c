//! Common code and struct.
//!

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default ground altitude threshold in feet
pub const DEF_FLOOR_FT: i64 = 750;

/// This structure holds a general location object with lat/long.
///
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Position {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Position {
            latitude,
            longitude,
        }
    }
}

/// Process-wide enrichment parameters: the fixed home point distances and bearings are
/// computed against, and the altitude floor below which a contact counts as being on
/// the ground.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Observer {
    /// Home reference point
    pub home: Position,
    /// Ground altitude threshold in feet
    pub floor_ft: i64,
}

impl Observer {
    pub fn new(home: Position, floor_ft: i64) -> Self {
        Observer { home, floor_ft }
    }
}

/// Numeric value of a JSON scalar.  The provider emits numbers and numeric strings
/// interchangeably; anything else is `None`.
///
pub(crate) fn num_from(v: Option<&Value>) -> Option<f64> {
    match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String value of a JSON scalar, `None` for empty strings.  Bare numbers in a string
/// slot are rendered as their decimal form.
///
pub(crate) fn str_from(v: Option<&Value>) -> Option<String> {
    match v {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
