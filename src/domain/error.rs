use chrono::NaiveDate;

/// Failures while building a price series or an event list from raw input.
///
/// Every variant aborts construction: there is never a partially usable series.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// Missing or unparseable date/price/label field in a raw row.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("non-positive price {price} on {date}, cannot take its logarithm")]
    NonPositivePrice { date: NaiveDate, price: f64 },

    /// Sort/dedupe failed to produce strictly ascending dates. A bug, not bad input.
    #[error("price series not strictly ascending at index {index} after normalization")]
    UnsortedAfterNormalization { index: usize },
}

impl DataError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
