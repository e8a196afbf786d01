//! QR code rendering for confirmation emails

use image::{ImageFormat, Luma};
use qrcode::QrCode;
use serde::Serialize;
use shared::models::Guest;
use std::io::Cursor;
use thiserror::Error;

/// Smallest edge of the rendered image, in pixels
const MIN_SIZE_PX: u32 = 250;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("payload does not fit in a QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),

    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// What the QR encodes: enough for door staff to check a guest in
/// without a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub reservation_code: String,
    pub name: String,
    /// Guest plus companions
    pub attendees: i64,
    pub url: String,
}

impl QrPayload {
    pub fn for_guest(guest: &Guest, frontend_url: &str) -> Self {
        Self {
            reservation_code: guest.reservation_code.clone(),
            name: guest.name.clone(),
            attendees: guest.total_attendees(),
            url: invitation_url(frontend_url, &guest.reservation_code),
        }
    }

    /// Stable text encoding (field order is fixed by the struct)
    pub fn encode(&self) -> Result<String, QrError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// `{frontend}/invitacion/{code}`
pub fn invitation_url(frontend_url: &str, code: &str) -> String {
    format!("{}/invitacion/{code}", frontend_url.trim_end_matches('/'))
}

/// Renders a text payload into image bytes
pub trait QrGenerator: Send + Sync {
    /// MIME type of the bytes returned by [`QrGenerator::render`]
    fn content_type(&self) -> &'static str;

    fn render(&self, payload: &str) -> Result<Vec<u8>, QrError>;
}

/// Grayscale PNG renderer
#[derive(Debug, Clone, Default)]
pub struct PngQrGenerator;

impl QrGenerator for PngQrGenerator {
    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn render(&self, payload: &str) -> Result<Vec<u8>, QrError> {
        let code = QrCode::new(payload.as_bytes())?;
        let img = code
            .render::<Luma<u8>>()
            .min_dimensions(MIN_SIZE_PX, MIN_SIZE_PX)
            .build();

        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}
