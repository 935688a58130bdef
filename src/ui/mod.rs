//! Presentation-side projections of filtered views. Rendering itself lives elsewhere.
mod chart_view;
mod table_view;

pub use chart_view::{
    AxisLabels, ChartView, EventMarker, PriceTracePoint, ReturnTracePoint, UnalignedMarker,
};
pub use table_view::{events_table, format_price, prices_table, summary_line};
