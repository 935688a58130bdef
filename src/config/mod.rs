//! Configuration module for brent-lens.

// Can all be private now because we have a public re-export.
mod debug;
mod input;
mod view;

// Re-export commonly used items
pub use debug::{DF, LogFlags};
pub use input::{INPUT, InputConfig};
pub use view::{VIEW, ViewConfig};

pub const LOG_PERFORMANCE: bool = DF.log_performance;
