//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default location for the `skywatch` configuration file.
//! The engine is neutral with regard to the actual file contents: it stores the base
//! directory and `load()` reads either the given file or the default one, checking the
//! embedded version number before handing the typed struct back.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::makepath;

/// Config filename
const CONFIG: &str = "config.hcl";

/// Main name for the directory base
const TAG: &str = "skywatch";

/// Every configuration file carries a version number so a stale file format is caught
/// at load time instead of deep inside the daemon.
///
pub trait Versioned {
    /// Version the loader expects
    const VERSION: usize;

    /// Version found in the file
    fn version(&self) -> usize;
}

/// Configuration engine, holding the base directory and the inner typed struct once
/// loaded.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned + Versioned> {
    /// This is the base directory for all files.
    basedir: PathBuf,
    inner: Option<T>,
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned + Versioned,
{
    fn new() -> Result<Self> {
        let basedir: PathBuf = match BaseDirs::new() {
            Some(base) => {
                #[cfg(unix)]
                let base = base.home_dir().join(".config");

                #[cfg(windows)]
                let base = base.data_local_dir().to_path_buf();

                debug!("base = {base:?}");
                base.join(TAG)
            }
            None => {
                #[cfg(unix)]
                let homedir = std::env::var("HOME")?;

                #[cfg(windows)]
                let homedir = std::env::var("LOCALAPPDATA")?;

                debug!("base = {homedir}");

                #[cfg(unix)]
                let base: PathBuf = makepath!(homedir, ".config", TAG);

                #[cfg(windows)]
                let base: PathBuf = makepath!(homedir, TAG);

                base
            }
        };
        Ok(ConfigFile {
            basedir,
            inner: None,
        })
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        self.config_path().join(CONFIG)
    }

    /// Load the file and return a struct `T` in the right format.
    ///
    /// Use the following search path:
    /// - file specified on the CLI
    /// - default basedir (based on `$HOME` or `%LOCALAPPDATA%`)
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<ConfigFile<T>> {
        let mut cfg = ConfigFile::<T>::new()?;

        let fname = match fname {
            Some(fname) => fname.to_path_buf(),
            None => cfg.default_file(),
        };

        if !fname.exists() {
            return Err(eyre!(
                "Unknown config file {:?} and no default in {:?}",
                fname,
                cfg.default_file()
            ));
        }

        trace!("Loading config file {fname:?}");

        let data = fs::read_to_string(&fname)?;
        let data: T = hcl::from_str(&data)?;
        debug!("struct data = {data:?}");

        if data.version() != T::VERSION {
            return Err(eyre!(
                "Bad config file version {}, expecting {}",
                data.version(),
                T::VERSION
            ));
        }

        cfg.inner = Some(data);
        Ok(cfg)
    }

    /// Return the inner configuration struct
    ///
    pub fn inner(&self) -> &T {
        self.inner.as_ref().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Foo {
        pub version: usize,
        pub name: String,
    }

    impl Versioned for Foo {
        const VERSION: usize = 1;

        fn version(&self) -> usize {
            self.version
        }
    }

    #[test]
    fn test_config_engine_load_file() -> Result<()> {
        let cfg = ConfigFile::<Foo>::load(Some(Path::new("testdata/local.hcl")))?;
        let inner = cfg.inner();

        assert_eq!(1, inner.version());
        assert_eq!("foo", inner.name);
        Ok(())
    }

    #[test]
    fn test_config_engine_bad_version() {
        let cfg = ConfigFile::<Foo>::load(Some(Path::new("testdata/stale.hcl")));

        assert!(cfg.is_err());
    }

    #[test]
    fn test_config_engine_no_file() {
        let cfg = ConfigFile::<Foo>::load(Some(Path::new("testdata/nonexistent.hcl")));

        assert!(cfg.is_err());
    }
}
