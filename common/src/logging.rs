//! Common logging initializer.
//!

use eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

#[tracing::instrument]
pub fn init_logging(name: &'static str, use_tree: bool, use_file: Option<String>) -> Result<()> {
    // Initialise logging early
    //
    // Load filters from environment
    //
    let filter = EnvFilter::from_default_env();

    // Do we want hierarchical output?
    //
    let (tree, fmt) = if use_tree {
        let tree = HierarchicalLayer::new(2)
            .with_ansi(true)
            .with_span_retrace(true)
            .with_span_modes(true)
            .with_targets(true)
            .with_verbose_entry(true)
            .with_verbose_exit(true)
            .with_bracketed_fields(true);
        (Some(tree), None)
    } else {
        let fmt = tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact();
        (None, Some(fmt))
    };

    // Log to file?
    //
    let file = use_file.map(|dir| {
        // Basic append-only rolling file for all traces.
        //
        let file_appender = tracing_appender::rolling::hourly(dir, name);
        tracing_subscriber::fmt::layer().with_writer(file_appender)
    });

    // Combine filters & exporters
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(fmt)
        .with(file)
        .init();

    Ok(())
}
