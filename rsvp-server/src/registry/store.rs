//! Persistent store seam for the guest registry

use async_trait::async_trait;
use shared::models::{Guest, GuestUpdate};
use sqlx::SqlitePool;

use crate::db::repository::guest::{self, GuestQuery, NewGuest};
use crate::db::repository::RepoResult;

/// Storage operations the registry depends on.
///
/// Implementations must enforce uniqueness of `reservation_code`
/// (reporting a collision as `RepoError::Duplicate`) and apply
/// `mark_confirmed` atomically.
#[async_trait]
pub trait GuestStore: Send + Sync {
    async fn insert(&self, guest: NewGuest) -> RepoResult<Guest>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Guest>>;
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Guest>>;
    async fn find(&self, query: GuestQuery) -> RepoResult<Vec<Guest>>;
    async fn update(&self, id: i64, data: &GuestUpdate) -> RepoResult<Option<Guest>>;
    /// Set the confirmation fields unless already confirmed.
    async fn mark_confirmed(&self, id: i64, email: &str, companions: i64)
    -> RepoResult<Option<Guest>>;
    async fn delete(&self, id: i64) -> RepoResult<Option<Guest>>;
}

/// [`GuestStore`] backed by the SQLite `guest` table
#[derive(Clone)]
pub struct SqliteGuestStore {
    pool: SqlitePool,
}

impl SqliteGuestStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestStore for SqliteGuestStore {
    async fn insert(&self, data: NewGuest) -> RepoResult<Guest> {
        guest::create(&self.pool, data).await
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Guest>> {
        guest::find_by_id(&self.pool, id).await
    }

    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Guest>> {
        guest::find_by_code(&self.pool, code).await
    }

    async fn find(&self, query: GuestQuery) -> RepoResult<Vec<Guest>> {
        guest::find(&self.pool, query).await
    }

    async fn update(&self, id: i64, data: &GuestUpdate) -> RepoResult<Option<Guest>> {
        guest::update(&self.pool, id, data).await
    }

    async fn mark_confirmed(
        &self,
        id: i64,
        email: &str,
        companions: i64,
    ) -> RepoResult<Option<Guest>> {
        guest::mark_confirmed(&self.pool, id, email, companions).await
    }

    async fn delete(&self, id: i64) -> RepoResult<Option<Guest>> {
        guest::delete(&self.pool, id).await
    }
}
