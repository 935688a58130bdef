mod dataset;
mod price_series;

pub use dataset::Dataset;
pub use price_series::PriceSeries;
