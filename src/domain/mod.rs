// Domain types and value objects
mod error;
mod event;
mod price_point;
mod raw_row;
mod view_window;

pub use error::DataError;
pub use event::{AlignedEvent, EventRecord};
pub use price_point::PricePoint;
pub use raw_row::{RawEventRow, RawPriceRow};
pub use view_window::ViewWindow;
