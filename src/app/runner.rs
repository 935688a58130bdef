use {
    crate::{
        Cli,
        data::load_dataset,
        domain::ViewWindow,
        models::Dataset,
        ui::{ChartView, events_table, prices_table, summary_line},
        utils::parse_date,
    },
    anyhow::{Context, Result, anyhow},
    chrono::NaiveDate,
};

/// Load both files, apply the requested window once and render the result.
pub fn run(args: &Cli) -> Result<String> {
    let dataset = load_dataset(&args.prices, &args.events).with_context(|| {
        format!(
            "Failed to build dataset from {} and {}",
            args.prices.display(),
            args.events.display()
        )
    })?;

    let window = window_from_args(args, &dataset)?;
    let view = dataset.filter(&window);

    if args.json {
        return ChartView::from_view(&view)
            .to_json()
            .context("Failed to serialize chart view");
    }

    Ok(format!(
        "{}\n\n{}\n\n{}\n",
        summary_line(&window, &view),
        prices_table(&view),
        events_table(&view)
    ))
}

/// Missing bounds default to the series' own first/last day; no `--label` means all labels.
pub fn window_from_args(args: &Cli, dataset: &Dataset) -> Result<ViewWindow> {
    let default = dataset.default_window();
    let start = optional_date(args.start.as_deref(), "--start")?.unwrap_or(default.start);
    let end = optional_date(args.end.as_deref(), "--end")?.unwrap_or(default.end);

    let window = ViewWindow::new(start, end);
    if args.labels.is_empty() {
        return Ok(window);
    }

    for label in &args.labels {
        if !dataset.labels().contains(label) {
            log::warn!("Label '{}' does not match any event", label);
        }
    }
    Ok(window.with_labels(args.labels.iter().cloned()))
}

fn optional_date(raw: Option<&str>, flag: &str) -> Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value).ok_or_else(|| anyhow!("Invalid date for {}: '{}'", flag, value)))
        .transpose()
}
