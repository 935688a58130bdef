//! Chart and table presentation strings

pub struct ViewConfig {
    pub price_title: &'static str,
    pub returns_title: &'static str,
    pub date_axis_label: &'static str,
    pub price_axis_label: &'static str,
    pub returns_axis_label: &'static str,
    /// Date format used in marker hover text and tables
    pub hover_date_format: &'static str,
    /// Separator between the date and the label in marker hover text
    pub hover_separator: &'static str,
    /// Shown in place of a price for events past the last trading day
    pub unaligned_marker: &'static str,
    pub no_prices_text: &'static str,
    pub no_events_text: &'static str,
}

pub const VIEW: ViewConfig = ViewConfig {
    price_title: "Brent Crude Oil Price",
    returns_title: "Daily Log Returns",
    date_axis_label: "Date",
    price_axis_label: "Price (USD per barrel)",
    returns_axis_label: "Log Return",
    hover_date_format: "%Y-%m-%d",
    hover_separator: "<br>",
    unaligned_marker: "unaligned",
    no_prices_text: "No price data in the selected window.",
    no_events_text: "No events in the selected window.",
};
