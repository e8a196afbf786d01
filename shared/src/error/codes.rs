//! Unified error codes for the RSVP service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Guest / reservation errors
//! - 2xxx: Notification errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Guest ====================
    /// No guest with the given id
    GuestNotFound = 1001,
    /// No guest with the given reservation code
    ReservationNotFound = 1002,
    /// Attendance was already confirmed for this reservation
    AlreadyConfirmed = 1003,
    /// Companion count is negative or above the guest's allowance
    InvalidCompanionCount = 1004,
    /// Generated reservation code collided with an existing one
    ReservationCodeTaken = 1005,

    // ==================== 2xxx: Notification ====================
    /// Confirmation email could not be delivered
    NotificationFailed = 2001,
    /// QR image could not be rendered
    QrRenderFailed = 2002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",

            // Guest
            ErrorCode::GuestNotFound => "Guest not found",
            ErrorCode::ReservationNotFound => "Reservation code not found",
            ErrorCode::AlreadyConfirmed => "Attendance has already been confirmed",
            ErrorCode::InvalidCompanionCount => "Invalid number of companions",
            ErrorCode::ReservationCodeTaken => "Reservation code already in use",

            // Notification
            ErrorCode::NotificationFailed => "Confirmation email could not be sent",
            ErrorCode::QrRenderFailed => "QR code could not be generated",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),

            // Guest
            1001 => Ok(ErrorCode::GuestNotFound),
            1002 => Ok(ErrorCode::ReservationNotFound),
            1003 => Ok(ErrorCode::AlreadyConfirmed),
            1004 => Ok(ErrorCode::InvalidCompanionCount),
            1005 => Ok(ErrorCode::ReservationCodeTaken),

            // Notification
            2001 => Ok(ErrorCode::NotificationFailed),
            2002 => Ok(ErrorCode::QrRenderFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
