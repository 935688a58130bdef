use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A labeled calendar event as supplied by the caller. Labels need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub date: NaiveDate,
    pub label: String,
}

impl EventRecord {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        Self {
            date,
            label: label.into(),
        }
    }
}

/// An event forward-aligned onto the price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignedEvent {
    pub date: NaiveDate,
    pub label: String,
    /// Price of the first trading day on or after `date`; None past the last trading day.
    pub aligned_price: Option<f64>,
    /// The trading day that supplied `aligned_price`.
    pub aligned_date: Option<NaiveDate>,
}

impl AlignedEvent {
    pub fn is_aligned(&self) -> bool {
        self.aligned_price.is_some()
    }
}
