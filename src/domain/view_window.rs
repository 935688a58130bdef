use {
    crate::models::PriceSeries,
    chrono::NaiveDate,
    std::collections::BTreeSet,
};

/// A filter request: inclusive date range plus an optional label subset.
/// `selected_labels == None` selects every label; `Some(empty)` selects none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub selected_labels: Option<BTreeSet<String>>,
}

impl ViewWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            selected_labels: None,
        }
    }

    /// Covers every representable date.
    pub fn unbounded() -> Self {
        Self::new(NaiveDate::MIN, NaiveDate::MAX)
    }

    /// Spans the whole series with all labels selected. None for an empty series.
    pub fn full(series: &PriceSeries) -> Option<Self> {
        series
            .date_range()
            .map(|(first, last)| Self::new(first, last))
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn all_labels(mut self) -> Self {
        self.selected_labels = None;
        self
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    #[inline]
    pub fn selects(&self, label: &str) -> bool {
        self.selected_labels
            .as_ref()
            .is_none_or(|labels| labels.contains(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        let window = ViewWindow::new(ymd(2020, 1, 1), ymd(2020, 1, 3));
        assert!(window.contains(ymd(2020, 1, 1)));
        assert!(window.contains(ymd(2020, 1, 3)));
        assert!(!window.contains(ymd(2020, 1, 4)));
    }

    #[test]
    fn none_selects_everything_and_empty_selects_nothing() {
        let window = ViewWindow::new(ymd(2020, 1, 1), ymd(2020, 1, 3));
        assert!(window.selects("anything"));

        let none_selected = window.clone().with_labels(Vec::<String>::new());
        assert!(!none_selected.selects("anything"));

        let some = window.with_labels(["OPEC cut"]);
        assert!(some.selects("OPEC cut"));
        assert!(!some.selects("Gulf War"));
        assert!(some.all_labels().selects("Gulf War"));
    }
}
