use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ReminderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    OutOfRange,
}

/// Failures of reminder list and ticker operations. All of them are
/// recoverable; the screen stays usable after any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReminderError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
    #[error("reminder {id} not found")]
    NotFound { id: ReminderId },
    #[error("offset {offset} out of range for list of length {len}")]
    OutOfRange { offset: usize, len: usize },
}

impl ReminderError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::Validation,
            Self::NotFound { .. } => ErrorCode::NotFound,
            Self::OutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }
}

/// Serializable form of a rejected intent, handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRejection {
    pub code: ErrorCode,
    pub message: String,
}

impl IntentRejection {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&ReminderError> for IntentRejection {
    fn from(value: &ReminderError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}

impl From<ReminderError> for IntentRejection {
    fn from(value: ReminderError) -> Self {
        Self::from(&value)
    }
}
