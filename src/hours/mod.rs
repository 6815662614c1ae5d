//! Opening-hours engine: parses weekly opening-hours text into a per-weekday
//! table and answers whether a given time falls inside it.
//!
//! Everything here is pure and synchronous.

pub mod error;
pub mod parser;
pub mod schedule;
pub mod time_span;
pub mod weekday;

pub use error::ParseError;
pub use parser::parse_schedule;
pub use schedule::{is_open_at, DaySchedule, WeeklySchedule};
pub use time_span::{TimeOfDay, TimeSpan};
pub use weekday::{expand_weekday_range, resolve_weekday, Weekday};
