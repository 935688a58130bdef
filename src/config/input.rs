//! Input file conventions for the price and event CSVs.

/// Column names and default locations of the two input files.
pub struct InputConfig {
    /// Default path of the daily price file
    pub prices_file: &'static str,
    /// Default path of the labeled event file
    pub events_file: &'static str,
    pub date_column: &'static str,
    pub price_column: &'static str,
    pub event_column: &'static str,
}

pub const INPUT: InputConfig = InputConfig {
    prices_file: "BrentOilPrices.csv",
    events_file: "BrentOilEvents.csv",
    date_column: "Date",
    price_column: "Price",
    event_column: "Event",
};
