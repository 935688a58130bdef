mod perf;
mod time_utils;

pub use perf::report_overrun;
pub use time_utils::{AppInstant, DateFormat, TimeUtils, format_date, parse_date};
