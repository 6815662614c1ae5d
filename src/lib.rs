pub mod config;
pub mod core;
pub mod domain;
pub mod hours;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{etl::SeedEngine, pipeline::SeedPipeline};
pub use domain::store::{RestaurantStore, SeedReport};
pub use hours::{is_open_at, parse_schedule, DaySchedule, ParseError, TimeOfDay, Weekday, WeeklySchedule};
pub use utils::error::{FrenzyError, Result};
