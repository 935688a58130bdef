//! Textual rows as handed over by a loader, before any parsing.
//! `line` is the 1-based source line, used in error reports.

use crate::{
    domain::{DataError, EventRecord, PricePoint},
    utils::parse_date,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPriceRow {
    pub line: usize,
    pub date: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEventRow {
    pub line: usize,
    pub date: String,
    pub label: String,
}

impl RawPriceRow {
    pub fn new(line: usize, date: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            line,
            date: date.into(),
            price: price.into(),
        }
    }

    pub fn parse(&self) -> Result<PricePoint, DataError> {
        let date = parse_date(&self.date).ok_or_else(|| {
            DataError::malformed(self.line, format!("unparseable date '{}'", self.date))
        })?;

        let raw_price = self.price.trim();
        if raw_price.is_empty() {
            return Err(DataError::malformed(self.line, "missing price"));
        }
        let price: f64 = raw_price.parse().map_err(|_| {
            DataError::malformed(self.line, format!("unparseable price '{}'", raw_price))
        })?;
        if !price.is_finite() {
            return Err(DataError::malformed(
                self.line,
                format!("price '{}' is not a finite number", raw_price),
            ));
        }

        Ok(PricePoint::new(date, price))
    }
}

impl RawEventRow {
    pub fn new(line: usize, date: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            line,
            date: date.into(),
            label: label.into(),
        }
    }

    pub fn parse(&self) -> Result<EventRecord, DataError> {
        let date = parse_date(&self.date).ok_or_else(|| {
            DataError::malformed(self.line, format!("unparseable date '{}'", self.date))
        })?;

        let label = self.label.trim();
        if label.is_empty() {
            return Err(DataError::malformed(self.line, "missing event label"));
        }

        Ok(EventRecord::new(date, label))
    }
}
