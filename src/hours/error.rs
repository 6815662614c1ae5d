use thiserror::Error;

/// Failure while turning opening-hours text into a weekly table.
///
/// Every variant carries the piece of input that could not be understood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed time span: {span:?}")]
    MalformedTimeSpan { span: String },

    #[error("Unrecognized weekday: {token:?}")]
    UnrecognizedWeekday { token: String },

    #[error("Malformed schedule group {group:?}: {reason}")]
    MalformedScheduleGroup { group: String, reason: String },
}

impl ParseError {
    /// The substring of the opening-hours text that caused the failure.
    pub fn offending_input(&self) -> &str {
        match self {
            ParseError::MalformedTimeSpan { span } => span,
            ParseError::UnrecognizedWeekday { token } => token,
            ParseError::MalformedScheduleGroup { group, .. } => group,
        }
    }
}
