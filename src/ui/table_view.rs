//! Plain-text tables for terminal output.

use {
    crate::{analysis::FilteredView, config::VIEW, domain::ViewWindow},
    tabled::{Table, Tabled, settings::Style},
};

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Log Return")]
    log_return: String,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Event")]
    label: String,
    #[tabled(rename = "Aligned Price")]
    aligned_price: String,
    #[tabled(rename = "Trading Day")]
    aligned_date: String,
}

/// Adaptive decimals, like a trader would read them.
pub fn format_price(price: f64) -> String {
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else {
        format!("${:.6}", price)
    }
}

fn format_return(log_return: Option<f64>) -> String {
    log_return
        .map(|r| format!("{:+.5}", r))
        .unwrap_or_else(|| "-".to_string())
}

pub fn summary_line(window: &ViewWindow, view: &FilteredView) -> String {
    let labels = match &window.selected_labels {
        None => "all labels".to_string(),
        Some(labels) => format!("{} selected labels", labels.len()),
    };
    format!(
        "{} .. {} ({}): {} trading days, {} events, {} unaligned",
        window.start.format(VIEW.hover_date_format),
        window.end.format(VIEW.hover_date_format),
        labels,
        view.prices.len(),
        view.events.len(),
        view.unaligned_events().count()
    )
}

pub fn prices_table(view: &FilteredView) -> String {
    if view.prices.is_empty() {
        return VIEW.no_prices_text.to_string();
    }

    let rows = view
        .prices
        .iter()
        .zip(&view.log_returns)
        .map(|(p, r)| PriceRow {
            date: p.date.format(VIEW.hover_date_format).to_string(),
            price: format_price(p.price),
            log_return: format_return(*r),
        });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

pub fn events_table(view: &FilteredView) -> String {
    if view.events.is_empty() {
        return VIEW.no_events_text.to_string();
    }

    let rows = view.events.iter().map(|event| EventRow {
        date: event.date.format(VIEW.hover_date_format).to_string(),
        label: event.label.clone(),
        aligned_price: event
            .aligned_price
            .map(format_price)
            .unwrap_or_else(|| VIEW.unaligned_marker.to_string()),
        aligned_date: event
            .aligned_date
            .map(|d| d.format(VIEW.hover_date_format).to_string())
            .unwrap_or_else(|| "-".to_string()),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
