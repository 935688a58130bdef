use chrono::{DateTime, NaiveDate, NaiveDateTime};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

pub type AppInstant = std::time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Date spellings accepted in raw input, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum DateFormat {
    #[strum(to_string = "%Y-%m-%d")]
    Iso,
    #[strum(to_string = "%Y-%m-%dT%H:%M:%S")]
    IsoDateTime,
    #[strum(to_string = "%Y-%m-%d %H:%M:%S")]
    IsoDateTimeSpaced,
    /// e.g. `20-May-87`
    #[strum(to_string = "%d-%b-%y")]
    DayMonthShortYear,
    /// e.g. `Apr 22, 2020`
    #[strum(to_string = "%b %d, %Y")]
    MonthDayYear,
    #[strum(to_string = "%d/%m/%Y")]
    DayMonthYearSlashed,
    /// Integer seconds since the Unix epoch
    #[strum(to_string = "epoch")]
    EpochSeconds,
}

impl DateFormat {
    pub fn parse(self, raw: &str) -> Option<NaiveDate> {
        match self {
            Self::EpochSeconds => {
                let secs: i64 = raw.parse().ok()?;
                DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
            }
            Self::IsoDateTime | Self::IsoDateTimeSpaced => {
                NaiveDateTime::parse_from_str(raw, &self.to_string())
                    .ok()
                    .map(|dt| dt.date())
            }
            _ => NaiveDate::parse_from_str(raw, &self.to_string()).ok(),
        }
    }
}

/// Parse a raw date field, trying every accepted spelling.
/// Returns None for blank or unrecognised input.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateFormat::iter().find_map(|format| format.parse(raw))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_every_accepted_spelling() {
        assert_eq!(parse_date("2020-01-03"), Some(ymd(2020, 1, 3)));
        assert_eq!(parse_date("2020-01-03T16:30:00"), Some(ymd(2020, 1, 3)));
        assert_eq!(parse_date("2020-01-03 00:00:00"), Some(ymd(2020, 1, 3)));
        assert_eq!(parse_date("20-May-87"), Some(ymd(1987, 5, 20)));
        assert_eq!(parse_date("Apr 22, 2020"), Some(ymd(2020, 4, 22)));
        assert_eq!(parse_date("03/01/2020"), Some(ymd(2020, 1, 3)));
        assert_eq!(parse_date("1577836800"), Some(ymd(2020, 1, 1)));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_date("  2020-01-03 "), Some(ymd(2020, 1, 3)));
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2020-13-01"), None);
    }

    #[test]
    fn formats_as_iso() {
        assert_eq!(format_date(ymd(1987, 5, 20)), "1987-05-20");
    }
}
