use super::time_span::{TimeOfDay, TimeSpan};
use super::weekday::Weekday;
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opening interval for a single weekday.
///
/// `overnight` always equals `closes_at < opens_at`; every constructor and
/// the deserializer enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredDaySchedule")]
pub struct DaySchedule {
    weekday: Weekday,
    opens_at: TimeOfDay,
    closes_at: TimeOfDay,
    overnight: bool,
}

/// Wire form of [`DaySchedule`] before the overnight flag is checked.
#[derive(Deserialize)]
struct StoredDaySchedule {
    weekday: Weekday,
    opens_at: TimeOfDay,
    closes_at: TimeOfDay,
    overnight: bool,
}

impl TryFrom<StoredDaySchedule> for DaySchedule {
    type Error = String;

    fn try_from(stored: StoredDaySchedule) -> Result<Self, Self::Error> {
        let day = DaySchedule::from_times(stored.weekday, stored.opens_at, stored.closes_at);
        if day.overnight != stored.overnight {
            return Err(format!(
                "overnight flag {} does not match {} {}-{}",
                stored.overnight, day.weekday, day.opens_at, day.closes_at
            ));
        }
        Ok(day)
    }
}

impl DaySchedule {
    pub fn new(weekday: Weekday, span: TimeSpan) -> Self {
        Self::from_times(weekday, span.opens_at(), span.closes_at())
    }

    pub fn from_times(weekday: Weekday, opens_at: TimeOfDay, closes_at: TimeOfDay) -> Self {
        Self {
            weekday,
            opens_at,
            closes_at,
            overnight: closes_at < opens_at,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
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

    /// Whether `time` on this schedule's own weekday is inside the interval.
    /// Both ends are inclusive. An overnight interval covers opening time
    /// through midnight plus midnight through closing time.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        if self.overnight {
            time >= self.opens_at || time <= self.closes_at
        } else {
            self.opens_at <= time && time <= self.closes_at
        }
    }
}

/// Decides whether a place is open at `time` on `weekday`, given the stored
/// entry for that weekday. No entry means closed all day.
pub fn is_open_at(schedule: Option<&DaySchedule>, weekday: Weekday, time: TimeOfDay) -> bool {
    match schedule {
        Some(day) if day.weekday == weekday => day.contains(time),
        _ => false,
    }
}

/// Per-weekday opening intervals. Weekdays without an entry are closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<DaySchedule>", into = "Vec<DaySchedule>")]
pub struct WeeklySchedule {
    days: BTreeMap<Weekday, DaySchedule>,
}

impl WeeklySchedule {
    pub fn get(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days.get(&weekday)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.keys().copied()
    }

    /// Entries in Monday-to-Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.values()
    }

    /// Only the entry for `weekday` itself is consulted. An overnight entry
    /// from the previous day does not make this day open after midnight.
    pub fn is_open_at(&self, weekday: Weekday, time: TimeOfDay) -> bool {
        is_open_at(self.get(weekday), weekday, time)
    }

    pub fn is_open_on(&self, at: NaiveDateTime) -> bool {
        self.is_open_at(at.weekday().into(), at.time().into())
    }
}

impl FromIterator<DaySchedule> for WeeklySchedule {
    /// Later entries for the same weekday replace earlier ones.
    fn from_iter<I: IntoIterator<Item = DaySchedule>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().map(|day| (day.weekday, day)).collect(),
        }
    }
}

impl From<Vec<DaySchedule>> for WeeklySchedule {
    fn from(days: Vec<DaySchedule>) -> Self {
        days.into_iter().collect()
    }
}

impl From<WeeklySchedule> for Vec<DaySchedule> {
    fn from(schedule: WeeklySchedule) -> Self {
        schedule.days.into_values().collect()
    }
}

impl IntoIterator for WeeklySchedule {
    type Item = DaySchedule;
    type IntoIter = std::collections::btree_map::IntoValues<Weekday, DaySchedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_values()
    }
}
