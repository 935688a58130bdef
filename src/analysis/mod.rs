// Pure passes over a built price series
mod event_aligner;
mod range_filter;

pub use event_aligner::{align_events, align_events_in_input_order, event_labels, events_from_raw};
pub use range_filter::{FilteredView, filter};
