//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Guest errors
/// - 2xxx: Notification errors
/// - everything else: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Guest / reservation errors (1xxx)
    Guest,
    /// Notification errors (2xxx)
    Notification,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Guest,
            2000..3000 => Self::Notification,
            _ => Self::System,
        }
    }

    /// Whether errors in this category indicate a failing dependency
    /// rather than a problem with the caller's input.
    pub fn is_server_side(&self) -> bool {
        matches!(self, Self::Notification | Self::System)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
