//! CSV ingest for the price and event files.
//!
//! The loader only splits files into textual rows. Parsing and validation
//! happen when the dataset is built, so every failure carries its source line.

use {
    crate::{
        config::{DF, INPUT},
        domain::{DataError, RawEventRow, RawPriceRow},
        models::Dataset,
    },
    csv::{ReaderBuilder, StringRecord, Trim},
    std::{
        fs::File,
        io::Read,
        path::{Path, PathBuf},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column '{column}' in {source_name}")]
    MissingColumn {
        column: &'static str,
        source_name: String,
    },

    #[error(transparent)]
    Data(#[from] DataError),
}

/// Read `Date,Price` rows from any reader. `source_name` only appears in errors.
pub fn read_price_rows<R: Read>(reader: R, source_name: &str) -> Result<Vec<RawPriceRow>, IngestError> {
    read_rows(
        reader,
        source_name,
        [INPUT.date_column, INPUT.price_column],
        |line, [date, price]| RawPriceRow::new(line, date, price),
    )
}

/// Read `Date,Event` rows from any reader.
pub fn read_event_rows<R: Read>(reader: R, source_name: &str) -> Result<Vec<RawEventRow>, IngestError> {
    read_rows(
        reader,
        source_name,
        [INPUT.date_column, INPUT.event_column],
        |line, [date, label]| RawEventRow::new(line, date, label),
    )
}

pub fn load_price_rows(path: &Path) -> Result<Vec<RawPriceRow>, IngestError> {
    read_price_rows(open(path)?, &path.display().to_string())
}

pub fn load_event_rows(path: &Path) -> Result<Vec<RawEventRow>, IngestError> {
    read_event_rows(open(path)?, &path.display().to_string())
}

/// Load both files and build a dataset. Any bad row aborts the whole load.
pub fn load_dataset(prices_path: &Path, events_path: &Path) -> Result<Dataset, IngestError> {
    let price_rows = load_price_rows(prices_path)?;
    let event_rows = load_event_rows(events_path)?;
    Ok(Dataset::from_raw(&price_rows, &event_rows)?)
}

fn open(path: &Path) -> Result<File, IngestError> {
    if DF.log_ingest {
        log::info!("Loading {}", path.display());
    }
    File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_rows<R, T, F>(
    reader: R,
    source_name: &str,
    columns: [&'static str; 2],
    make_row: F,
) -> Result<Vec<T>, IngestError>
where
    R: Read,
    F: Fn(usize, [&str; 2]) -> T,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let [first, second] = columns.map(|column| column_index(&headers, column));
    let (first, second) = match (first, second) {
        (Some(a), Some(b)) => (a, b),
        (None, _) => return Err(missing(columns[0], source_name)),
        (_, None) => return Err(missing(columns[1], source_name)),
    };

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);
        let fields = [
            record.get(first).unwrap_or(""),
            record.get(second).unwrap_or(""),
        ];
        rows.push(make_row(line, fields));
    }

    if DF.log_ingest {
        log::info!("Read {} rows from {}", rows.len(), source_name);
    }

    Ok(rows)
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn missing(column: &'static str, source_name: &str) -> IngestError {
    IngestError::MissingColumn {
        column,
        source_name: source_name.to_string(),
    }
}
