use {
    crate::{
        config::DF,
        domain::{AlignedEvent, DataError, EventRecord, RawEventRow},
        models::PriceSeries,
    },
    itertools::Itertools,
};

/// Parse textual event rows. The first malformed row aborts.
pub fn events_from_raw(rows: &[RawEventRow]) -> Result<Vec<EventRecord>, DataError> {
    rows.iter().map(RawEventRow::parse).collect()
}

/// Forward-align events onto the series.
///
/// Each event gets the price of the first trading day on or after its date, or
/// None when it falls after the last trading day. Output is sorted by event
/// date; events sharing a date keep their input order.
pub fn align_events(events: &[EventRecord], series: &PriceSeries) -> Vec<AlignedEvent> {
    align_sorted(sorted_order(events), events, series)
        .into_iter()
        .map(|(_, aligned)| aligned)
        .collect()
}

/// Same alignment as `align_events`, projected back to the caller's input order.
pub fn align_events_in_input_order(
    events: &[EventRecord],
    series: &PriceSeries,
) -> Vec<AlignedEvent> {
    let mut slots: Vec<Option<AlignedEvent>> = vec![None; events.len()];
    for (input_idx, aligned) in align_sorted(sorted_order(events), events, series) {
        slots[input_idx] = Some(aligned);
    }
    slots.into_iter().flatten().collect()
}

/// Distinct labels in aligned order: the option list for a label picker.
pub fn event_labels(aligned: &[AlignedEvent]) -> Vec<String> {
    aligned
        .iter()
        .map(|event| event.label.clone())
        .unique()
        .collect()
}

/// Input indices ordered by event date. `sort_by_key` is stable, so ties keep input order.
fn sorted_order(events: &[EventRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&idx| events[idx].date);
    order
}

/// Two-pointer merge of date-sorted events against the date-sorted series.
/// The cursor only moves forward, so `order` must be ascending by date.
fn align_sorted(
    order: Vec<usize>,
    events: &[EventRecord],
    series: &PriceSeries,
) -> Vec<(usize, AlignedEvent)> {
    let points = series.points();
    let mut cursor = 0usize;
    let mut unaligned = 0usize;

    let aligned: Vec<(usize, AlignedEvent)> = order
        .into_iter()
        .map(|idx| {
            let event = &events[idx];
            while cursor < points.len() && points[cursor].date < event.date {
                cursor += 1;
            }

            let target = points.get(cursor);
            if target.is_none() {
                unaligned += 1;
                if DF.log_unaligned_events {
                    log::debug!(
                        "Event '{}' on {} is after the last trading day, left unaligned",
                        event.label,
                        event.date
                    );
                }
            }

            (
                idx,
                AlignedEvent {
                    date: event.date,
                    label: event.label.clone(),
                    aligned_price: target.map(|p| p.price),
                    aligned_date: target.map(|p| p.date),
                },
            )
        })
        .collect();

    if unaligned > 0 && DF.log_unaligned_events {
        log::warn!(
            "{} of {} events have no trading day on or after their date",
            unaligned,
            events.len()
        );
    }

    aligned
}
