use brent_lens::{EventRecord, PricePoint, PriceSeries, ViewWindow, align_events, filter};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    base() + Duration::days(offset)
}

fn price_rows() -> impl Strategy<Value = Vec<PricePoint>> {
    prop::collection::vec((0i64..40, 1.0f64..500.0), 0..30)
        .prop_map(|rows| rows.into_iter().map(|(d, p)| PricePoint::new(day(d), p)).collect::<Vec<_>>())
}

fn event_rows() -> impl Strategy<Value = Vec<EventRecord>> {
    let labels = prop::sample::select(vec!["OPEC", "War", "Crash", "Sanctions"]);
    prop::collection::vec((-5i64..50, labels), 0..20).prop_map(|rows| {
        rows.into_iter()
            .map(|(d, label)| EventRecord::new(day(d), label))
            .collect::<Vec<_>>()
    })
}

/// O(n*m) reference: earliest point with date >= event date.
fn brute_force_price(series: &PriceSeries, date: NaiveDate) -> Option<f64> {
    series
        .points()
        .iter()
        .filter(|p| p.date >= date)
        .min_by_key(|p| p.date)
        .map(|p| p.price)
}

proptest! {
    #[test]
    fn series_is_strictly_ascending_and_rebuilds_identically(rows in price_rows()) {
        let series = PriceSeries::build(rows.clone()).unwrap();
        prop_assert!(series.points().windows(2).all(|w| w[0].date < w[1].date));
        prop_assert_eq!(PriceSeries::build(rows).unwrap(), series);
    }

    #[test]
    fn last_row_wins_for_every_date(rows in price_rows()) {
        let series = PriceSeries::build(rows.clone()).unwrap();
        for point in series.points() {
            let last = rows.iter().rev().find(|r| r.date == point.date).unwrap();
            prop_assert_eq!(point.price, last.price);
        }
    }

    #[test]
    fn log_returns_reproduce_price_ratios(rows in price_rows()) {
        let series = PriceSeries::build(rows).unwrap();
        let points = series.points();
        prop_assert_eq!(series.log_returns().len(), points.len());
        if !points.is_empty() {
            prop_assert_eq!(series.log_return_at(0), None);
        }
        for i in 1..points.len() {
            let r = series.log_return_at(i).unwrap();
            let ratio = points[i].price / points[i - 1].price;
            prop_assert!((r.exp() - ratio).abs() <= 1e-9 * ratio.max(1.0));
        }
    }

    #[test]
    fn two_pointer_alignment_matches_brute_force(rows in price_rows(), events in event_rows()) {
        let series = PriceSeries::build(rows).unwrap();
        let aligned = align_events(&events, &series);

        prop_assert_eq!(aligned.len(), events.len());
        prop_assert!(aligned.windows(2).all(|w| w[0].date <= w[1].date));
        for event in &aligned {
            prop_assert_eq!(event.aligned_price, brute_force_price(&series, event.date));
        }
    }

    #[test]
    fn filter_is_a_projection_and_shrinking_never_grows(
        rows in price_rows(),
        events in event_rows(),
        a in -5i64..50,
        b in -5i64..50,
        trim_start in 0i64..10,
        trim_end in 0i64..10,
    ) {
        let series = PriceSeries::build(rows).unwrap();
        let aligned = align_events(&events, &series);
        let (start, end) = (day(a.min(b)), day(a.max(b)));

        let wide = filter(&series, &aligned, &ViewWindow::new(start, end));
        prop_assert_eq!(wide.prices.as_slice(), series.points_in_range(start, end));
        prop_assert_eq!(wide.prices.len(), wide.log_returns.len());
        prop_assert!(wide.events.iter().all(|e| start <= e.date && e.date <= end));

        let narrow_window = ViewWindow::new(
            start + Duration::days(trim_start),
            end - Duration::days(trim_end),
        );
        let narrow = filter(&series, &aligned, &narrow_window);
        prop_assert!(narrow.prices.len() <= wide.prices.len());
        prop_assert!(narrow.events.len() <= wide.events.len());

        let selected = filter(&series, &aligned, &ViewWindow::new(start, end).with_labels(["War"]));
        prop_assert!(selected.events.len() <= wide.events.len());
        prop_assert!(selected.events.iter().all(|e| e.label == "War"));
    }
}

#[test]
fn worked_example() {
    let series = PriceSeries::build(vec![
        PricePoint::new(day(0), 100.0),
        PricePoint::new(day(2), 110.0),
    ])
    .unwrap();
    let aligned = align_events(
        &[
            EventRecord::new(day(1), "X"),
            EventRecord::new(day(3), "After"),
        ],
        &series,
    );

    assert_eq!(aligned[0].aligned_price, Some(110.0));
    assert_eq!(aligned[1].aligned_price, None);
    assert!((series.log_return_at(1).unwrap() - 0.0953).abs() < 1e-4);

    let view = filter(&series, &aligned, &ViewWindow::new(day(0), day(0)));
    assert_eq!(view.prices, vec![PricePoint::new(day(0), 100.0)]);
    assert!(view.events.is_empty());
}
