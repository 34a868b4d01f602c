//! Module describing the daemon's command line options.
//!
//! Everything here overrides the equivalent `config.hcl` value.
//!

use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, Parser};

/// CLI options
#[derive(Debug, Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Alternate state directory.
    #[clap(short = 'w', long)]
    pub workdir: Option<PathBuf>,
    /// debug mode (hierarchical trace output).
    #[clap(short = 'D', long = "debug")]
    pub debug: bool,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Start of the active window (local hour).
    #[clap(long)]
    pub start_hour: Option<u32>,
    /// End of the active window (local hour).
    #[clap(long)]
    pub end_hour: Option<u32>,
    /// Ground altitude threshold in feet.
    #[clap(long)]
    pub floor: Option<i64>,
    /// Seconds between fetch cycles.
    #[clap(long)]
    pub every: Option<u64>,
    /// API listening IP.
    #[clap(short = 'L', long)]
    pub listen: Option<String>,
    /// API port.
    #[clap(short = 'P', long)]
    pub port: Option<u16>,
    /// Run a single fetch-and-process cycle and exit.
    #[clap(long)]
    pub once: bool,
}
