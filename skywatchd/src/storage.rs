//! On-disk state: the last raw and the last processed snapshot.
//!
//! Both files are replaced wholesale each cycle.  Replacement goes through a temporary
//! file and a rename so a concurrent reader never observes a partial snapshot.
//!

use std::fs;
use std::path::{Path, PathBuf};

use eyre::Result;
use serde_json::Value;
use tracing::{debug, trace};

use skywatch_formats::AircraftRecord;

/// Last raw snapshot filename
const RAW_FILE: &str = "data.json";
/// Last processed snapshot filename
const PROCESSED_FILE: &str = "processed.json";

/// The state directory and the two snapshot files in it.
///
#[derive(Clone, Debug)]
pub struct Storage {
    /// State directory
    base: PathBuf,
}

impl Storage {
    /// Open the state directory, creating it if needed.
    ///
    #[tracing::instrument]
    pub fn register(base: &Path) -> Result<Self> {
        trace!("storage::register {:?}", base);

        if !base.exists() {
            fs::create_dir_all(base)?;
        }
        Ok(Storage {
            base: base.to_owned(),
        })
    }

    pub fn raw_path(&self) -> PathBuf {
        self.base.join(RAW_FILE)
    }

    pub fn processed_path(&self) -> PathBuf {
        self.base.join(PROCESSED_FILE)
    }

    /// Replace the stored raw snapshot, pretty-printed.
    ///
    #[tracing::instrument(skip(self, raw))]
    pub fn store_raw(&self, raw: &Value) -> Result<()> {
        self.swap(self.raw_path(), serde_json::to_string_pretty(raw)?)
    }

    /// Replace the stored processed snapshot.
    ///
    #[tracing::instrument(skip(self, records))]
    pub fn store_processed(&self, records: &[AircraftRecord]) -> Result<()> {
        self.swap(self.processed_path(), serde_json::to_string_pretty(records)?)
    }

    /// Read a state file back as JSON.
    ///
    pub fn load(&self, path: &Path) -> Result<Value> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write then rename, so readers only ever see complete files.
    ///
    fn swap(&self, target: PathBuf, data: String) -> Result<()> {
        let tmp = target.with_extension("tmp");

        fs::write(&tmp, data)?;
        fs::rename(&tmp, &target)?;
        debug!("replaced {:?}", target);
        Ok(())
    }
}
