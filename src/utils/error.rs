use crate::hours::{ParseError, Weekday};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrenzyError {
    #[error("Invalid opening hours for restaurant {restaurant:?}: {source}")]
    OpeningHoursError {
        restaurant: String,
        #[source]
        source: ParseError,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Restaurant {restaurant:?} already has a schedule for {weekday}")]
    DuplicateScheduleError { restaurant: String, weekday: Weekday },

    #[error("Unknown restaurant id: {id}")]
    UnknownRestaurantError { id: usize },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FrenzyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FrenzyError::OpeningHoursError { .. } | FrenzyError::SerializationError(_) => ErrorCategory::Input,
            FrenzyError::ApiError(_) => ErrorCategory::Network,
            FrenzyError::IoError(_)
            | FrenzyError::DuplicateScheduleError { .. }
            | FrenzyError::UnknownRestaurantError { .. } => ErrorCategory::Storage,
            FrenzyError::ConfigValidationError { .. }
            | FrenzyError::InvalidConfigValueError { .. }
            | FrenzyError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FrenzyError::OpeningHoursError { .. } => {
                "Fix the opening hours text or rerun with --skip-invalid-hours"
            }
            FrenzyError::ApiError(_) => "Check the data source URL and network, then retry",
            FrenzyError::IoError(_) => "Check that the paths exist and are writable",
            FrenzyError::SerializationError(_) => {
                "Make sure the source returns a JSON array of restaurants"
            }
            FrenzyError::DuplicateScheduleError { .. } => {
                "Replace the weekly schedule instead of inserting single days twice"
            }
            FrenzyError::UnknownRestaurantError { .. } => "Add the restaurant before its schedule",
            FrenzyError::ConfigValidationError { .. }
            | FrenzyError::InvalidConfigValueError { .. }
            | FrenzyError::MissingConfigError { .. } => "Review the command line flags or config file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FrenzyError::OpeningHoursError { restaurant, source } => format!(
                "Could not read the opening hours of {:?} near {:?}",
                restaurant,
                source.offending_input()
            ),
            FrenzyError::ApiError(_) => "Could not download the restaurant data".to_string(),
            FrenzyError::SerializationError(_) => "The restaurant data is not valid JSON".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FrenzyError>;
