//! This is the `skywatchd` daemon launcher.
//!
//! It fetches aircraft snapshots for the configured watch area on a schedule,
//! normalizes and enriches them and serves the last results over a small read API.
//!

use clap::{crate_description, crate_version, Parser};
use eyre::Result;
use tracing::{error, info};

use skywatch_common::{init_logging, ConfigFile};

mod cli;
mod config;
mod cycle;
mod server;
mod storage;

use cli::Opts;
use config::Config;
use cycle::Runner;
use server::{router, AppState};
use storage::Storage;

/// Daemon name
const NAME: &str = env!("CARGO_BIN_NAME");

/// Daemon version
const VERSION: &str = crate_version!();

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();

    // -v raises the default filter when RUST_LOG is not set.
    //
    if std::env::var("RUST_LOG").is_err() {
        let level = match opts.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        std::env::set_var("RUST_LOG", level);
    }

    // Initialise logging early.
    //
    init_logging(NAME, opts.debug, None)?;

    // Config first, then CLI overrides.
    //
    let cfg_file = ConfigFile::<Config>::load(opts.config.as_deref())?;
    let mut cfg = cfg_file.inner().clone();

    if let Some(h) = opts.start_hour {
        cfg.window.start_hour = h;
    }
    if let Some(h) = opts.end_hour {
        cfg.window.end_hour = h;
    }
    if let Some(floor) = opts.floor {
        cfg.floor_ft = floor;
    }
    if let Some(every) = opts.every {
        cfg.every = every;
    }
    if let Some(listen) = opts.listen {
        cfg.listen = listen;
    }
    if let Some(port) = opts.port {
        cfg.port = port;
    }

    banner();

    // State directory: CLI override, then config, then the config basedir.
    //
    let state_dir = opts
        .workdir
        .or_else(|| cfg.state_dir.clone())
        .unwrap_or_else(|| cfg_file.config_path());
    let storage = Storage::register(&state_dir)?;

    let mut runner = Runner::new(&cfg, storage.clone())?;

    // One-shot mode: a single cycle, no API.
    //
    if opts.once {
        return runner.cycle().await;
    }

    // The scheduler stopping (failure budget) does not stop the read API, which keeps
    // serving the last good snapshots.
    //
    tokio::spawn(async move {
        if let Err(report) = runner.run().await {
            error!("scheduler stopped: {}", report);
        }
    });

    let addr = format!("{}:{}", cfg.listen, cfg.port);
    info!("Server running on http://{}", addr);

    let app = router(AppState { storage });
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Display banner
///
fn banner() {
    eprintln!("{}/{}\n{}", NAME, VERSION, crate_description!());
}
