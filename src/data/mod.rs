mod loader;
mod shared_dataset;

pub use {
    loader::{
        IngestError, load_dataset, load_event_rows, load_price_rows, read_event_rows,
        read_price_rows,
    },
    shared_dataset::SharedDataset,
};
