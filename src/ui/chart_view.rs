use {
    crate::{analysis::FilteredView, config::VIEW},
    chrono::NaiveDate,
    serde::Serialize,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTracePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnTracePoint {
    pub date: NaiveDate,
    /// Dimensionless; null for the first trading day of the series.
    pub log_return: Option<f64>,
}

/// An event drawn on the price trace at its aligned price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMarker {
    pub date: NaiveDate,
    pub price: f64,
    pub label: String,
    pub hover: String,
}

/// An event with no trading day on or after its date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnalignedMarker {
    pub date: NaiveDate,
    pub label: String,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabels {
    pub x: &'static str,
    pub y: &'static str,
}

/// Renderer-ready projection of a `FilteredView`: one price chart with event
/// markers and one log-return chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub price_title: &'static str,
    pub price_axes: AxisLabels,
    pub returns_title: &'static str,
    pub returns_axes: AxisLabels,
    pub price_trace: Vec<PriceTracePoint>,
    pub return_trace: Vec<ReturnTracePoint>,
    pub event_markers: Vec<EventMarker>,
    pub unaligned_events: Vec<UnalignedMarker>,
}

impl ChartView {
    pub fn from_view(view: &FilteredView) -> Self {
        let price_trace = view
            .prices
            .iter()
            .map(|p| PriceTracePoint {
                date: p.date,
                price: p.price,
            })
            .collect();

        let return_trace = view
            .prices
            .iter()
            .zip(&view.log_returns)
            .map(|(p, r)| ReturnTracePoint {
                date: p.date,
                log_return: *r,
            })
            .collect();

        let mut event_markers = Vec::new();
        let mut unaligned_events = Vec::new();
        for event in &view.events {
            let hover = hover_text(event.date, &event.label);
            match event.aligned_price {
                Some(price) => event_markers.push(EventMarker {
                    date: event.date,
                    price,
                    label: event.label.clone(),
                    hover,
                }),
                None => unaligned_events.push(UnalignedMarker {
                    date: event.date,
                    label: event.label.clone(),
                    hover,
                }),
            }
        }

        Self {
            price_title: VIEW.price_title,
            price_axes: AxisLabels {
                x: VIEW.date_axis_label,
                y: VIEW.price_axis_label,
            },
            returns_title: VIEW.returns_title,
            returns_axes: AxisLabels {
                x: VIEW.date_axis_label,
                y: VIEW.returns_axis_label,
            },
            price_trace,
            return_trace,
            event_markers,
            unaligned_events,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn hover_text(date: NaiveDate, label: &str) -> String {
    format!(
        "{}{}{}",
        date.format(VIEW.hover_date_format),
        VIEW.hover_separator,
        label
    )
}
