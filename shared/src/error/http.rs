//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound | Self::GuestNotFound | Self::ReservationNotFound => {
                StatusCode::NOT_FOUND
            }

            Self::AlreadyExists | Self::ReservationCodeTaken => StatusCode::CONFLICT,

            Self::NotificationFailed
            | Self::QrRenderFailed
            | Self::InternalError
            | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // Validation, AlreadyConfirmed, InvalidCompanionCount
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
