use {
    crate::{
        config::DF,
        domain::{DataError, PricePoint, RawPriceRow},
    },
    chrono::NaiveDate,
    serde::Serialize,
    std::{collections::BTreeMap, ops::Range},
};

/// Daily price series, sorted by date with one point per trading day,
/// plus the log return of every point against its predecessor.
///
/// Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
    /// `log_returns[0]` is None; `log_returns[i] = ln(p[i]) - ln(p[i-1])`.
    log_returns: Vec<Option<f64>>,
}

impl PriceSeries {
    /// Build from typed rows in input order.
    ///
    /// Rows are sorted by date. When the same date appears more than once the
    /// later row in input order wins.
    pub fn build<I>(rows: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = PricePoint>,
    {
        crate::trace_time!("PriceSeries::build", 20_000, {
            let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
            let mut rows_read = 0usize;
            let mut overwritten = 0usize;

            for row in rows {
                rows_read += 1;
                if by_date.insert(row.date, row.price).is_some() {
                    overwritten += 1;
                }
            }

            let points: Vec<PricePoint> = by_date
                .into_iter()
                .map(|(date, price)| PricePoint::new(date, price))
                .collect();

            if let Some(index) = first_unsorted_index(&points) {
                return Err(DataError::UnsortedAfterNormalization { index });
            }

            let log_returns = compute_log_returns(&points)?;

            if DF.log_series_build {
                log::info!(
                    "Built price series: {} rows read, {} points kept, {} duplicate dates overwritten",
                    rows_read,
                    points.len(),
                    overwritten
                );
            }

            Ok(Self {
                points,
                log_returns,
            })
        })
    }

    /// Parse textual rows, then build. The first malformed row aborts the whole build.
    pub fn from_raw(rows: &[RawPriceRow]) -> Result<Self, DataError> {
        let points = rows
            .iter()
            .map(RawPriceRow::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Self::build(points)
    }

    /// Exact-date lookup.
    pub fn price_at(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|idx| self.points[idx].price)
    }

    /// Points with `start <= date <= end`, ascending. Empty when `start > end`.
    pub fn points_in_range(&self, start: NaiveDate, end: NaiveDate) -> &[PricePoint] {
        &self.points[self.index_range(start, end)]
    }

    /// Index bounds of `points_in_range`, usable on `log_returns` too.
    pub fn index_range(&self, start: NaiveDate, end: NaiveDate) -> Range<usize> {
        let lo = self.points.partition_point(|p| p.date < start);
        if start > end {
            return lo..lo;
        }
        let hi = self.points.partition_point(|p| p.date <= end);
        lo..hi
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn log_returns(&self) -> &[Option<f64>] {
        &self.log_returns
    }

    pub fn log_return_at(&self, idx: usize) -> Option<f64> {
        self.log_returns.get(idx).copied().flatten()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }
}

fn first_unsorted_index(points: &[PricePoint]) -> Option<usize> {
    points
        .windows(2)
        .position(|pair| pair[0].date >= pair[1].date)
        .map(|idx| idx + 1)
}

fn compute_log_returns(points: &[PricePoint]) -> Result<Vec<Option<f64>>, DataError> {
    let mut log_prices = Vec::with_capacity(points.len());
    for point in points {
        if !point.price.is_finite() || point.price <= 0.0 {
            return Err(DataError::NonPositivePrice {
                date: point.date,
                price: point.price,
            });
        }
        log_prices.push(point.price.ln());
    }

    let mut log_returns = Vec::with_capacity(points.len());
    if !log_prices.is_empty() {
        log_returns.push(None);
    }
    log_returns.extend(log_prices.windows(2).map(|pair| Some(pair[1] - pair[0])));

    Ok(log_returns)
}
