pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use chrono::NaiveDateTime;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "buying-frenzy")]
#[command(about = "Load restaurant opening hours and find out who is open")]
pub struct CliConfig {
    /// URL or file path of the restaurant JSON feed
    #[arg(long, env = "RESTAURANT_DATA_URL")]
    pub source: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// List the restaurants open at this local time, e.g. 2022-02-14T21:30
    #[arg(long, value_parser = parse_open_at)]
    pub open_at: Option<NaiveDateTime>,

    /// Keep restaurants with unreadable opening hours as closed instead of failing
    #[arg(long)]
    pub skip_invalid_hours: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
pub fn parse_open_at(value: &str) -> Result<NaiveDateTime> {
    validation::validate_open_at("open_at", value)
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source(&self) -> &str {
        &self.source
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn skip_invalid_hours(&self) -> bool {
        self.skip_invalid_hours
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_source("source", &self.source)?;
        validation::validate_path("output_path", &self.output_path)
    }
}
