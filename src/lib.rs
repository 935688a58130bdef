// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{FilteredView, align_events, filter};
pub use data::{IngestError, SharedDataset, load_dataset};
pub use domain::{AlignedEvent, DataError, EventRecord, PricePoint, ViewWindow};
pub use models::{Dataset, PriceSeries};

// CLI argument parsing
use {clap::Parser, config::INPUT, std::path::PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV with `Date,Price` columns
    #[arg(long, default_value = INPUT.prices_file)]
    pub prices: PathBuf,

    /// CSV with `Date,Event` columns
    #[arg(long, default_value = INPUT.events_file)]
    pub events: PathBuf,

    /// First day of the view window (defaults to the first trading day)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day of the view window (defaults to the last trading day)
    #[arg(long)]
    pub end: Option<String>,

    /// Only show events with this label. Repeatable; omit to show all labels
    #[arg(long = "label")]
    pub labels: Vec<String>,

    /// Emit the chart view as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Debug-level logging for this crate
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Entry point for the binary: build once, filter once, render.
pub fn run_app(args: &Cli) -> anyhow::Result<String> {
    app::run(args)
}
