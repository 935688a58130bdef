use {
    crate::{
        analysis::{FilteredView, align_events, event_labels, events_from_raw, filter},
        config::DF,
        domain::{AlignedEvent, DataError, EventRecord, PricePoint, RawEventRow, RawPriceRow, ViewWindow},
        models::PriceSeries,
    },
    rayon::prelude::*,
};

/// One built price series together with its aligned events.
///
/// Read-only after construction, so any number of threads may filter it at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    series: PriceSeries,
    events: Vec<AlignedEvent>,
    labels: Vec<String>,
}

impl Dataset {
    pub fn build<I>(prices: I, events: &[EventRecord]) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = PricePoint>,
    {
        let series = PriceSeries::build(prices)?;
        let events = align_events(events, &series);
        let labels = event_labels(&events);

        if DF.log_dataset_publish {
            log::info!(
                "Dataset ready: {} trading days, {} events, {} distinct labels",
                series.count(),
                events.len(),
                labels.len()
            );
        }

        Ok(Self {
            series,
            events,
            labels,
        })
    }

    pub fn from_raw(price_rows: &[RawPriceRow], event_rows: &[RawEventRow]) -> Result<Self, DataError> {
        let prices = price_rows
            .iter()
            .map(RawPriceRow::parse)
            .collect::<Result<Vec<_>, _>>()?;
        let events = events_from_raw(event_rows)?;
        Self::build(prices, &events)
    }

    pub fn filter(&self, window: &ViewWindow) -> FilteredView {
        crate::trace_time!("Dataset::filter", 5_000, {
            filter(&self.series, &self.events, window)
        })
    }

    /// Serve many windows at once; results come back in `windows` order.
    pub fn filter_batch(&self, windows: &[ViewWindow]) -> Vec<FilteredView> {
        windows.par_iter().map(|window| self.filter(window)).collect()
    }

    /// Whole series, all labels. Unbounded when the series is empty.
    pub fn default_window(&self) -> ViewWindow {
        ViewWindow::full(&self.series).unwrap_or_else(ViewWindow::unbounded)
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    /// Aligned events in ascending date order.
    pub fn events(&self) -> &[AlignedEvent] {
        &self.events
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
