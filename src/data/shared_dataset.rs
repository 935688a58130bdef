use {
    crate::{
        config::DF,
        domain::{DataError, RawEventRow, RawPriceRow},
        models::Dataset,
    },
    std::sync::{Arc, RwLock},
};

/// Publishes a fully built `Dataset` to any number of readers.
///
/// Readers take a snapshot (`Arc<Dataset>`) and filter it without holding the
/// lock. A rebuild constructs the replacement completely, then swaps the `Arc`,
/// so nobody ever sees a half-built series.
#[derive(Debug, Clone, Default)]
pub struct SharedDataset {
    // Arc lets us share ownership. RwLock guards only the pointer swap.
    inner: Arc<RwLock<Arc<Dataset>>>,
}

impl SharedDataset {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(dataset))),
        }
    }

    /// The currently published dataset.
    pub fn snapshot(&self) -> Arc<Dataset> {
        // The guarded value is a single Arc, a panicking writer cannot leave it half-written
        let guard = self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the published dataset, returning the previous one.
    pub fn publish(&self, dataset: Dataset) -> Arc<Dataset> {
        self.swap(Arc::new(dataset))
    }

    /// Build from new raw input and publish on success, returning the dataset
    /// this call built. On error the previously published dataset stays in place.
    pub fn rebuild(
        &self,
        price_rows: &[RawPriceRow],
        event_rows: &[RawEventRow],
    ) -> Result<Arc<Dataset>, DataError> {
        let next = Arc::new(Dataset::from_raw(price_rows, event_rows)?);
        self.swap(Arc::clone(&next));
        Ok(next)
    }

    fn swap(&self, next: Arc<Dataset>) -> Arc<Dataset> {
        let mut guard = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = std::mem::replace(&mut *guard, next);

        if DF.log_dataset_publish {
            log::info!(
                "Published dataset: {} trading days, {} events (replaced {} days)",
                guard.series().count(),
                guard.events().len(),
                previous.series().count()
            );
        }

        previous
    }
}
