//! Debugging feature flags.

pub struct LogFlags {
    /// Log row counts and dropped duplicates while building the price series.
    pub log_series_build: bool,

    /// Log every event that ends up without an aligned price.
    pub log_unaligned_events: bool,

    /// Log window bounds and slice sizes for each filter request.
    pub log_filter: bool,

    /// Log file opens and row counts in the CSV loader.
    pub log_ingest: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    pub log_dataset_publish: bool,
}

pub const DF: LogFlags = LogFlags {
    log_series_build: true,
    log_unaligned_events: true,
    log_ingest: true,
    log_dataset_publish: true,

    log_filter: false,
    log_performance: false,
};
