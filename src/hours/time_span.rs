use super::error::ParseError;
use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Seconds and sub-second precision are dropped.
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(time.hour.into(), time.minute.into(), 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    /// Parses the 24-hour `HH:MM` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(TimeOfDay::from)
            .map_err(|e| format!("invalid time of day {:?}: {}", s, e))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// Opening and closing time of one day-group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    opens_at: TimeOfDay,
    closes_at: TimeOfDay,
    overnight: bool,
}

impl TimeSpan {
    pub fn new(opens_at: TimeOfDay, closes_at: TimeOfDay) -> Self {
        Self {
            opens_at,
            closes_at,
            overnight: closes_at < opens_at,
        }
    }

    /// Parses a whitespace-free `open-close` token such as `7:45am-2am`.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedTimeSpan {
            span: token.to_string(),
        };

        let (start, end) = token.split_once('-').ok_or_else(malformed)?;
        let opens_at = parse_clock_time(start).ok_or_else(malformed)?;
        let closes_at = parse_clock_time(end).ok_or_else(malformed)?;

        Ok(Self::new(opens_at, closes_at))
    }

    pub fn opens_at(&self) -> TimeOfDay {
        self.opens_at
    }

    pub fn closes_at(&self) -> TimeOfDay {
        self.closes_at
    }

    /// Closing time falls on the next calendar day.
    pub fn overnight(&self) -> bool {
        self.overnight
    }
}

/// Parses one 12-hour clock time (`10:30am`, `11PM`). The form with minutes
/// is tried first, then the hour-only form.
pub fn parse_clock_time(side: &str) -> Option<TimeOfDay> {
    NaiveTime::parse_from_str(side, "%I:%M%p")
        .ok()
        .or_else(|| parse_hour_only(side))
        .map(TimeOfDay::from)
}

fn parse_hour_only(side: &str) -> Option<NaiveTime> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, side, StrftimeItems::new("%I%p")).ok()?;
    parsed.set_minute(0).ok()?;
    parsed.to_naive_time().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::from_hm(hour, minute).unwrap()
    }

    #[test]
    fn test_parse_clock_time_with_and_without_minutes() {
        assert_eq!(parse_clock_time("10:30am"), Some(t(10, 30)));
        assert_eq!(parse_clock_time("11pm"), Some(t(23, 0)));
        assert_eq!(parse_clock_time("2:15PM"), Some(t(14, 15)));
        assert_eq!(parse_clock_time("6am"), Some(t(6, 0)));
    }

    #[test]
    fn test_twelve_oclock_conversion() {
        assert_eq!(parse_clock_time("12am"), Some(TimeOfDay::MIDNIGHT));
        assert_eq!(parse_clock_time("12:30am"), Some(t(0, 30)));
        assert_eq!(parse_clock_time("12pm"), Some(t(12, 0)));
        assert_eq!(parse_clock_time("12:45pm"), Some(t(12, 45)));
    }

    #[test]
    fn test_parse_clock_time_rejects_garbage() {
        assert_eq!(parse_clock_time("13pm"), None);
        assert_eq!(parse_clock_time("0am"), None);
        assert_eq!(parse_clock_time("10:61am"), None);
        assert_eq!(parse_clock_time("10"), None);
        assert_eq!(parse_clock_time("noon"), None);
        assert_eq!(parse_clock_time(""), None);
    }

    #[test]
    fn test_overnight_span() {
        let span = TimeSpan::parse("7:45am-2am").unwrap();
        assert_eq!(span.opens_at(), t(7, 45));
        assert_eq!(span.closes_at(), t(2, 0));
        assert!(span.overnight());
    }

    #[test]
    fn test_same_day_span() {
        let span = TimeSpan::parse("10am-9pm").unwrap();
        assert_eq!(span.opens_at(), t(10, 0));
        assert_eq!(span.closes_at(), t(21, 0));
        assert!(!span.overnight());
    }

    #[test]
    fn test_closing_at_midnight_is_overnight() {
        let span = TimeSpan::parse("5:45pm-12am").unwrap();
        assert_eq!(span.closes_at(), TimeOfDay::MIDNIGHT);
        assert!(span.overnight());
    }

    #[test]
    fn test_malformed_spans() {
        for token in ["10am9pm", "10am-", "-9pm", "10am-9", "ten-9pm"] {
            let err = TimeSpan::parse(token).unwrap_err();
            assert_eq!(
                err,
                ParseError::MalformedTimeSpan {
                    span: token.to_string()
                }
            );
        }
    }

    #[test]
    fn test_time_of_day_display_and_serde() {
        let time = t(7, 5);
        assert_eq!(time.to_string(), "07:05");
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"07:05\"");
        let back: TimeOfDay = serde_json::from_str("\"21:30\"").unwrap();
        assert_eq!(back, t(21, 30));
        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }

    #[test]
    fn test_from_naive_time_truncates_seconds() {
        let naive = NaiveTime::from_hms_opt(21, 0, 59).unwrap();
        assert_eq!(TimeOfDay::from(naive), t(21, 0));
        assert_eq!(TimeOfDay::from_hm(24, 0), None);
    }
}
