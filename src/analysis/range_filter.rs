use {
    crate::{
        config::DF,
        domain::{AlignedEvent, PricePoint, ViewWindow},
        models::PriceSeries,
    },
    serde::Serialize,
};

/// The result of one filter request.
///
/// `log_returns[i]` belongs to `prices[i]` and is taken from the full series, so
/// the first point of a window keeps its return against the previous trading day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredView {
    pub prices: Vec<PricePoint>,
    pub log_returns: Vec<Option<f64>>,
    pub events: Vec<AlignedEvent>,
}

impl FilteredView {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.events.is_empty()
    }

    pub fn unaligned_events(&self) -> impl Iterator<Item = &AlignedEvent> {
        self.events.iter().filter(|event| !event.is_aligned())
    }
}

/// Project the series and aligned events through a view window.
///
/// Never fails: empty or inverted windows and empty selections give empty slices.
pub fn filter(
    series: &PriceSeries,
    aligned_events: &[AlignedEvent],
    window: &ViewWindow,
) -> FilteredView {
    let prices = series.points_in_range(window.start, window.end).to_vec();
    let log_returns = series.log_returns()[series.index_range(window.start, window.end)].to_vec();

    let events: Vec<AlignedEvent> = aligned_events
        .iter()
        .filter(|event| window.contains(event.date) && window.selects(&event.label))
        .cloned()
        .collect();

    if DF.log_filter {
        log::debug!(
            "Filter [{} .. {}] labels={:?}: {} prices, {} events",
            window.start,
            window.end,
            window.selected_labels.as_ref().map(|labels| labels.len()),
            prices.len(),
            events.len()
        );
    }

    FilteredView {
        prices,
        log_returns,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analysis::align_events, domain::EventRecord};
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixture() -> (PriceSeries, Vec<AlignedEvent>) {
        let series = PriceSeries::build(vec![
            PricePoint::new(ymd(2020, 1, 1), 100.0),
            PricePoint::new(ymd(2020, 1, 3), 110.0),
            PricePoint::new(ymd(2020, 1, 6), 99.0),
        ])
        .unwrap();
        let events = align_events(
            &[
                EventRecord::new(ymd(2020, 1, 2), "X"),
                EventRecord::new(ymd(2020, 1, 6), "Y"),
                EventRecord::new(ymd(2020, 1, 9), "Z"),
            ],
            &series,
        );
        (series, events)
    }

    #[test]
    fn single_day_window_excludes_later_events() {
        let (series, events) = fixture();
        let view = filter(&series, &events, &ViewWindow::new(ymd(2020, 1, 1), ymd(2020, 1, 1)));

        assert_eq!(view.prices, vec![PricePoint::new(ymd(2020, 1, 1), 100.0)]);
        assert_eq!(view.log_returns, vec![None]);
        assert!(view.events.is_empty());
    }

    #[test]
    fn window_keeps_returns_against_the_previous_day() {
        let (series, events) = fixture();
        let view = filter(&series, &events, &ViewWindow::new(ymd(2020, 1, 2), ymd(2020, 1, 6)));

        assert_eq!(view.prices.len(), 2);
        assert_eq!(view.log_returns.len(), 2);
        let r = view.log_returns[0].unwrap();
        assert!((r - (110.0f64 / 100.0).ln()).abs() < 1e-12);

        let labels: Vec<_> = view.events.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["X", "Y"]);
    }

    #[test]
    fn label_selection_narrows_events_only() {
        let (series, events) = fixture();
        let window = ViewWindow::new(ymd(2020, 1, 1), ymd(2020, 1, 31)).with_labels(["Z"]);
        let view = filter(&series, &events, &window);

        assert_eq!(view.prices.len(), 3);
        assert_eq!(view.events.len(), 1);
        assert_eq!(view.events[0].label, "Z");
        assert_eq!(view.unaligned_events().count(), 1);
    }

    #[test]
    fn empty_selection_yields_no_events() {
        let (series, events) = fixture();
        let window =
            ViewWindow::new(ymd(2020, 1, 1), ymd(2020, 1, 31)).with_labels(Vec::<String>::new());
        let view = filter(&series, &events, &window);
        assert_eq!(view.prices.len(), 3);
        assert!(view.events.is_empty());
    }

    #[test]
    fn inverted_and_disjoint_windows_are_empty_not_errors() {
        let (series, events) = fixture();

        let inverted = filter(&series, &events, &ViewWindow::new(ymd(2020, 1, 6), ymd(2020, 1, 1)));
        assert!(inverted.is_empty());
        assert!(inverted.log_returns.is_empty());

        let disjoint = filter(&series, &events, &ViewWindow::new(ymd(2021, 1, 1), ymd(2021, 2, 1)));
        assert!(disjoint.is_empty());
    }

    #[test]
    fn empty_inputs_give_an_empty_view() {
        let view = filter(&PriceSeries::default(), &[], &ViewWindow::unbounded());
        assert_eq!(view, FilteredView::default());
    }
}
