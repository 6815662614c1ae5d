use super::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, indexed from Monday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The weekday `days` days after this one, wrapping Sunday to Monday.
    pub fn add_days(self, days: u8) -> Self {
        Self::ALL[(usize::from(self.index()) + usize::from(days)) % 7]
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or_else(|| format!("weekday index out of range: {}", index))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

/// Resolves a weekday abbreviation as written in opening-hours text.
///
/// Matching is case-insensitive. Only `Mon`, `Tues`, `Wed`/`Weds`,
/// `Thu`/`Thurs`, `Fri`, `Sat` and `Sun` are accepted.
pub fn resolve_weekday(token: &str) -> Result<Weekday, ParseError> {
    match token.trim().to_ascii_uppercase().as_str() {
        "MON" => Ok(Weekday::Monday),
        "TUES" => Ok(Weekday::Tuesday),
        "WED" | "WEDS" => Ok(Weekday::Wednesday),
        "THU" | "THURS" => Ok(Weekday::Thursday),
        "FRI" => Ok(Weekday::Friday),
        "SAT" => Ok(Weekday::Saturday),
        "SUN" => Ok(Weekday::Sunday),
        _ => Err(ParseError::UnrecognizedWeekday {
            token: token.to_string(),
        }),
    }
}

/// Every weekday from `start` through `end` inclusive, wrapping past Sunday
/// when `end` comes before `start`.
pub fn expand_weekday_range(start: Weekday, end: Weekday) -> Vec<Weekday> {
    let diff = (end.index() + 7 - start.index()) % 7;
    (0..=diff).map(|offset| start.add_days(offset)).collect()
}
