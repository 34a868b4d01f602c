//! The fetch-and-process cycle and its scheduler.
//!
//! One cycle: fetch a raw snapshot for the watch box, keep it on disk as soon as it
//! parses, run the enrichment and replace the processed snapshot.  The scheduler runs
//! cycles on a fixed interval inside the active window and owns the failure counter;
//! once the budget is exhausted it stops scheduling for good.
//!

use chrono::{Local, NaiveTime};
use eyre::Result;
use serde_json::Value;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, error, info, trace, warn};

use skywatch_common::BB;
use skywatch_formats::{Observer, Snapshot};
use skywatch_sources::{BoundarySource, Fetchable};

use crate::config::{Config, Window};
use crate::storage::Storage;

/// Scheduler state.  The failure counter lives here, not in a global.
///
pub struct Runner {
    source: BoundarySource,
    observer: Observer,
    boundary: BB,
    storage: Storage,
    window: Window,
    every: Duration,
    max_failures: u32,
    failures: u32,
}

impl Runner {
    pub fn new(cfg: &Config, storage: Storage) -> Result<Self> {
        let source = BoundarySource::new().load(&cfg.site)?;

        Ok(Runner {
            source,
            observer: cfg.observer(),
            boundary: cfg.boundary(),
            storage,
            window: cfg.window,
            every: Duration::from_secs(cfg.every),
            max_failures: cfg.max_failures,
            failures: 0,
        })
    }

    /// One fetch-and-process cycle.  Any error counts toward the failure budget; the
    /// previous processed snapshot stays untouched in that case.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn cycle(&self) -> Result<()> {
        info!("Getting flight data…");

        let body = self.source.fetch(&self.boundary).await?;

        // Raw body is kept as soon as it parses; processed output only on success.
        //
        let raw: Value = serde_json::from_str(&body)?;
        self.storage.store_raw(&raw)?;

        let snapshot = Snapshot::from_value(raw)?;
        debug!("'{}' shape parse", snapshot.shape());

        let records = snapshot.enrich(&self.observer);
        info!("{} aircraft kept", records.len());

        self.storage.store_processed(&records)?;
        Ok(())
    }

    /// Scheduler loop.  The first tick fires immediately, which gives us the startup
    /// cycle when we are inside the window.
    ///
    #[tracing::instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Beginning scheduled runs every {}s.", self.every.as_secs());

        let mut timer = interval(self.every);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            timer.tick().await;

            if self.failures >= self.max_failures {
                error!(
                    "Stopping scheduled runs due to repeated ({}) failures.",
                    self.failures
                );
                break;
            }
            if !in_window(Local::now().time(), &self.window) {
                trace!("outside the active window");
                continue;
            }
            if let Err(report) = self.cycle().await {
                self.failures += 1;
                warn!(
                    "cycle failed ({}/{}): {}",
                    self.failures, self.max_failures, report
                );
            }
        }
        Ok(())
    }
}

/// Window test, inclusive on both bounds.  An end before the start wraps past
/// midnight.
///
pub fn in_window(now: NaiveTime, w: &Window) -> bool {
    let start = NaiveTime::from_hms_opt(w.start_hour % 24, 0, 0).unwrap_or_default();
    let end = NaiveTime::from_hms_opt(w.end_hour % 24, 0, 0).unwrap_or_default();

    if end < start {
        now >= start || now <= end
    } else {
        now >= start && now <= end
    }
}
