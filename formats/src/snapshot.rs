//! Snapshot container: shape detection and whole-snapshot enrichment.
//!
//! The shape is decided exactly once, at the boundary.  Individual malformed entries
//! degrade to defaults and are filtered by the altitude floor; only a snapshot whose
//! shape cannot be determined is an error, in which case the caller keeps whatever
//! output it had before.
//!

use serde_json::Value;
use strum::EnumString;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{AircraftRecord, Contact, LabeledEntry, Observer, PositionalEntry};

/// Errors a whole snapshot can produce.  Anything below snapshot level degrades
/// silently instead.
///
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The body is not JSON at all
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Parsed fine but carries neither recognized container key
    #[error("unknown snapshot shape, expected an \"aircraft\" or \"data\" key")]
    UnknownShape,
}

/// Which container key identified the snapshot.
///
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, strum::Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    #[default]
    None,
    /// Positional state arrays under `"aircraft"`
    Aircraft,
    /// Labeled objects under `"data"`
    Data,
}

/// A decoded provider snapshot.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Snapshot {
    /// Shape A
    Positional(Vec<PositionalEntry>),
    /// Shape B
    Labeled(Vec<LabeledEntry>),
    /// Nothing to process (null or empty body)
    #[default]
    Empty,
}

impl Snapshot {
    /// Detect the shape of a raw body and decode every entry.
    ///
    #[tracing::instrument(skip(input))]
    pub fn from_json(input: &str) -> Result<Self, SnapshotError> {
        trace!("snapshot::from_json");

        if input.trim().is_empty() {
            return Ok(Snapshot::Empty);
        }
        let value: Value = serde_json::from_str(input)?;
        Snapshot::from_value(value)
    }

    /// Same as [Snapshot::from_json] for an already-parsed document.
    ///
    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        let obj = match value {
            Value::Null => return Ok(Snapshot::Empty),
            Value::Object(obj) => obj,
            _ => return Err(SnapshotError::UnknownShape),
        };

        if let Some(list) = obj.get("aircraft").filter(|v| !v.is_null()) {
            let entries = list
                .as_array()
                .map(|entries| {
                    entries
                        .iter()
                        .map(|e| {
                            PositionalEntry::decode(e.as_array().map(Vec::as_slice).unwrap_or(&[]))
                        })
                        .collect()
                })
                .unwrap_or_default();
            return Ok(Snapshot::Positional(entries));
        }

        if let Some(list) = obj.get("data").filter(|v| !v.is_null()) {
            let entries = list
                .as_array()
                .map(|entries| {
                    entries
                        .iter()
                        .map(|e| serde_json::from_value(e.clone()).unwrap_or_default())
                        .collect()
                })
                .unwrap_or_default();
            return Ok(Snapshot::Labeled(entries));
        }

        Err(SnapshotError::UnknownShape)
    }

    /// Which container key was found.
    ///
    pub fn shape(&self) -> Shape {
        match self {
            Snapshot::Positional(_) => Shape::Aircraft,
            Snapshot::Labeled(_) => Shape::Data,
            Snapshot::Empty => Shape::None,
        }
    }

    /// Run the enrichment over every entry, dropping ground-level contacts.  Output
    /// order follows input order.
    ///
    #[tracing::instrument(skip(self, observer))]
    pub fn enrich(&self, observer: &Observer) -> Vec<AircraftRecord> {
        let records: Vec<AircraftRecord> = match self {
            Snapshot::Positional(entries) => entries
                .iter()
                .map(Contact::from)
                .filter_map(|c| c.into_record(observer))
                .collect(),
            Snapshot::Labeled(entries) => entries
                .iter()
                .map(Contact::from)
                .filter_map(|c| c.into_record(observer))
                .collect(),
            Snapshot::Empty => vec![],
        };
        debug!("{} records", records.len());
        records
    }
}

/// Process one raw snapshot body end-to-end: detect the shape, decode, enrich.  On
/// success the returned sequence replaces the previous output wholesale; on error the
/// caller must leave its previous output untouched.
///
#[tracing::instrument(skip(input, observer))]
pub fn process(input: &str, observer: &Observer) -> Result<Vec<AircraftRecord>, SnapshotError> {
    let snapshot = Snapshot::from_json(input)?;
    debug!("'{}' shape parse", snapshot.shape());

    Ok(snapshot.enrich(observer))
}
