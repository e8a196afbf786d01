//! Guest Registry
//!
//! Owns the guest lifecycle: registration, lookup by reservation code,
//! one-way confirmation (persist, then notify), update, delete and listing.
//! Storage, mail delivery and QR rendering come in through traits so the
//! registry can be exercised without a network.

pub mod store;

use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ConfirmAttendance, Guest, GuestCreate, GuestUpdate, coerce_companions};
use std::sync::Arc;

use crate::core::config::InvitationConfig;
use crate::db::repository::RepoError;
use crate::db::repository::guest::{GuestQuery, NewGuest};
use crate::notify::template::{self, CONFIRMATION_SUBJECT, QR_CONTENT_ID};
use crate::notify::{InlineImage, Notifier, OutboundEmail};
use crate::qr::{QrGenerator, QrPayload};
use crate::utils::validation::{normalize_email, normalize_name, validate_max_companions};

pub use store::{GuestStore, SqliteGuestStore};

/// Fresh codes drawn before giving up on a registration
pub const MAX_CODE_ATTEMPTS: usize = 3;

/// Successful confirmation
#[derive(Debug, Clone, Serialize)]
pub struct Confirmation {
    pub guest: Guest,
    pub message: String,
}

/// Successful deletion
#[derive(Debug, Clone, Serialize)]
pub struct Deletion {
    pub guest: Guest,
    pub message: String,
}

#[derive(Clone)]
pub struct GuestRegistry {
    store: Arc<dyn GuestStore>,
    notifier: Arc<dyn Notifier>,
    qr: Arc<dyn QrGenerator>,
    invitation: InvitationConfig,
}

impl GuestRegistry {
    pub fn new(
        store: Arc<dyn GuestStore>,
        notifier: Arc<dyn Notifier>,
        qr: Arc<dyn QrGenerator>,
        invitation: InvitationConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            qr,
            invitation,
        }
    }

    /// Create an invitation with a freshly generated reservation code.
    pub async fn register(&self, req: GuestCreate) -> AppResult<Guest> {
        let name = normalize_name(req.name.as_deref())?;
        let max_companions = req.max_companions.unwrap_or(0);
        validate_max_companions(max_companions)?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let data = NewGuest {
                name: name.clone(),
                reservation_code: shared::util::generate_reservation_code(),
                max_companions,
            };
            match self.store.insert(data).await {
                Ok(guest) => {
                    tracing::info!(
                        id = guest.id,
                        code = %guest.reservation_code,
                        max_companions,
                        "Guest registered"
                    );
                    return Ok(guest);
                }
                Err(RepoError::Duplicate(_)) => {
                    tracing::warn!(attempt, "Reservation code collision, drawing a new one");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::new(ErrorCode::ReservationCodeTaken).with_detail("attempts", MAX_CODE_ATTEMPTS))
    }

    /// Exact, case-sensitive match on the reservation code
    pub async fn find_by_code(&self, code: &str) -> AppResult<Guest> {
        self.store
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::reservation_not_found(code))
    }

    /// Confirm attendance and send the QR code by email.
    ///
    /// The confirmation is persisted before anything is sent. If rendering
    /// or delivery fails the caller gets `NotificationFailed` and the guest
    /// stays confirmed.
    pub async fn confirm(&self, req: ConfirmAttendance) -> AppResult<Confirmation> {
        let code = req.reservation_code.as_deref().filter(|s| !s.trim().is_empty());
        let email = req.email.as_deref().filter(|s| !s.trim().is_empty());
        let (Some(code), Some(email)) = (code, email) else {
            return Err(AppError::required("reservationCode and email are required")
                .with_detail("fields", vec!["reservationCode", "email"]));
        };
        let companions = coerce_companions(req.companions.as_ref());

        let guest = self.find_by_code(code).await?;
        if guest.confirmed {
            return Err(AppError::already_confirmed(code));
        }
        if companions < 0 || companions > guest.max_companions {
            return Err(AppError::invalid_companions(companions, guest.max_companions));
        }
        let email = normalize_email(email)?;

        // Conditional write: a concurrent confirmation or delete that got
        // there first leaves nothing to update.
        let Some(guest) = self.store.mark_confirmed(guest.id, &email, companions).await? else {
            return match self.store.find_by_id(guest.id).await? {
                Some(_) => Err(AppError::already_confirmed(code)),
                None => Err(AppError::reservation_not_found(code)),
            };
        };
        tracing::info!(id = guest.id, code = %code, companions, "Attendance confirmed");

        self.send_confirmation(&guest, &email).await?;

        Ok(Confirmation {
            message: format!(
                "Thank you for confirming, {}! An email with your QR code has been sent to {email}.",
                guest.name
            ),
            guest,
        })
    }

    async fn send_confirmation(&self, guest: &Guest, to: &str) -> AppResult<()> {
        let payload = QrPayload::for_guest(guest, &self.invitation.frontend_url);
        let image = payload
            .encode()
            .and_then(|text| self.qr.render(&text))
            .map_err(|e| {
                tracing::error!(code = %guest.reservation_code, error = %e, "QR rendering failed");
                AppError::new(ErrorCode::QrRenderFailed)
                    .with_detail("reservationCode", guest.reservation_code.as_str())
            })?;

        let email = OutboundEmail {
            to: to.to_string(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            html_body: template::render_confirmation(guest, &self.invitation.event),
            inline_image: Some(InlineImage {
                content_id: QR_CONTENT_ID.to_string(),
                content_type: self.qr.content_type().to_string(),
                bytes: image,
            }),
        };

        self.notifier.send(email).await.map_err(|e| {
            tracing::error!(code = %guest.reservation_code, to = %to, error = %e, "Confirmation email failed");
            AppError::notification(format!(
                "Attendance was confirmed but the confirmation email could not be sent: {e}"
            ))
            .with_detail("reservationCode", guest.reservation_code.as_str())
        })
    }

    /// Every guest, newest first
    pub async fn list_all(&self) -> AppResult<Vec<Guest>> {
        Ok(self.store.find(GuestQuery::all()).await?)
    }

    /// Confirmed guests, most recently updated first
    pub async fn list_confirmed(&self) -> AppResult<Vec<Guest>> {
        Ok(self.store.find(GuestQuery::confirmed()).await?)
    }

    /// Partial update of name / maxCompanions.
    ///
    /// Lowering `maxCompanions` below an existing confirmation is allowed;
    /// the confirmed count is left as it is.
    pub async fn update(&self, id: i64, req: GuestUpdate) -> AppResult<Guest> {
        let name = req.name.as_deref().map(|n| normalize_name(Some(n))).transpose()?;
        if let Some(max) = req.max_companions {
            validate_max_companions(max)?;
        }
        let patch = GuestUpdate {
            name,
            max_companions: req.max_companions,
        };

        let guest = self
            .store
            .update(id, &patch)
            .await?
            .ok_or_else(|| AppError::guest_not_found(id))?;
        tracing::info!(id, "Guest updated");
        Ok(guest)
    }

    /// Remove a guest in any state
    pub async fn delete(&self, id: i64) -> AppResult<Deletion> {
        let guest = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::guest_not_found(id))?;
        tracing::info!(id, code = %guest.reservation_code, "Guest deleted");
        Ok(Deletion {
            message: format!("Guest '{}' was deleted successfully", guest.name),
            guest,
        })
    }
}
