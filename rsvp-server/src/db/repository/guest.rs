//! Guest Repository

use super::RepoResult;
use shared::models::{Guest, GuestUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, reservation_code, max_companions, confirmed, confirmation_email, confirmed_companions, created_at, updated_at";

/// Row to insert; timestamps and id are assigned here.
#[derive(Debug, Clone)]
pub struct NewGuest {
    pub name: String,
    pub reservation_code: String,
    pub max_companions: i64,
}

/// Sort order for [`find`]. Ties fall back to insertion order, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuestSort {
    #[default]
    CreatedDesc,
    UpdatedDesc,
}

/// Filter + sort for listing guests
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestQuery {
    pub confirmed: Option<bool>,
    pub sort: GuestSort,
}

impl GuestQuery {
    /// Every guest, newest first
    pub fn all() -> Self {
        Self::default()
    }

    /// Confirmed guests, most recently updated first
    pub fn confirmed() -> Self {
        Self {
            confirmed: Some(true),
            sort: GuestSort::UpdatedDesc,
        }
    }
}

pub async fn create(pool: &SqlitePool, data: NewGuest) -> RepoResult<Guest> {
    let now = shared::util::now_millis();
    let guest = sqlx::query_as::<_, Guest>(&format!(
        "INSERT INTO guest (name, reservation_code, max_companions, confirmed, confirmed_companions, created_at, updated_at) \
         VALUES (?1, ?2, ?3, 0, 0, ?4, ?4) RETURNING {COLUMNS}"
    ))
    .bind(&data.name)
    .bind(&data.reservation_code)
    .bind(data.max_companions)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(guest)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Guest>> {
    let guest = sqlx::query_as::<_, Guest>(&format!("SELECT {COLUMNS} FROM guest WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(guest)
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<Guest>> {
    let guest = sqlx::query_as::<_, Guest>(&format!(
        "SELECT {COLUMNS} FROM guest WHERE reservation_code = ? LIMIT 1"
    ))
    .bind(code)
    .fetch_optional(pool)
    .await?;
    Ok(guest)
}

pub async fn find(pool: &SqlitePool, query: GuestQuery) -> RepoResult<Vec<Guest>> {
    let order = match query.sort {
        GuestSort::CreatedDesc => "created_at DESC, id DESC",
        GuestSort::UpdatedDesc => "updated_at DESC, id DESC",
    };
    let guests = match query.confirmed {
        Some(confirmed) => {
            sqlx::query_as::<_, Guest>(&format!(
                "SELECT {COLUMNS} FROM guest WHERE confirmed = ? ORDER BY {order}"
            ))
            .bind(confirmed)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Guest>(&format!("SELECT {COLUMNS} FROM guest ORDER BY {order}"))
                .fetch_all(pool)
                .await?
        }
    };
    Ok(guests)
}

/// Partial update of the mutable fields. `None` when the id does not exist.
pub async fn update(pool: &SqlitePool, id: i64, data: &GuestUpdate) -> RepoResult<Option<Guest>> {
    let now = shared::util::now_millis();
    let guest = sqlx::query_as::<_, Guest>(&format!(
        "UPDATE guest SET name = COALESCE(?1, name), max_companions = COALESCE(?2, max_companions), updated_at = ?3 \
         WHERE id = ?4 RETURNING {COLUMNS}"
    ))
    .bind(data.name.as_deref())
    .bind(data.max_companions)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(guest)
}

/// Record the confirmation in one conditional statement.
///
/// Returns `None` when the guest does not exist or was already confirmed,
/// so two concurrent confirmations cannot both succeed.
pub async fn mark_confirmed(
    pool: &SqlitePool,
    id: i64,
    email: &str,
    companions: i64,
) -> RepoResult<Option<Guest>> {
    let now = shared::util::now_millis();
    let guest = sqlx::query_as::<_, Guest>(&format!(
        "UPDATE guest SET confirmed = 1, confirmation_email = ?1, confirmed_companions = ?2, updated_at = ?3 \
         WHERE id = ?4 AND confirmed = 0 RETURNING {COLUMNS}"
    ))
    .bind(email)
    .bind(companions)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(guest)
}

/// Hard delete. Returns the removed row, `None` when the id does not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<Option<Guest>> {
    let guest = sqlx::query_as::<_, Guest>(&format!(
        "DELETE FROM guest WHERE id = ? RETURNING {COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(guest)
}
