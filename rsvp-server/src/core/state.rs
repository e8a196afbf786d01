use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::DbService;
use crate::notify::{Notifier, SmtpNotifier};
use crate::qr::{PngQrGenerator, QrGenerator};
use crate::registry::{GuestRegistry, SqliteGuestStore};

/// Shared state, cloned into every handler
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | Immutable settings |
/// | db | SQLite pool (health checks, shutdown) |
/// | registry | Guest workflow over the store, notifier and QR generator |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub registry: GuestRegistry,
}

impl ServerState {
    /// Wire the state from explicit collaborators
    pub fn new(
        config: Config,
        db: DbService,
        notifier: Arc<dyn Notifier>,
        qr: Arc<dyn QrGenerator>,
    ) -> Self {
        let store = Arc::new(SqliteGuestStore::new(db.pool.clone()));
        let registry = GuestRegistry::new(store, notifier, qr, config.invitation.clone());
        Self {
            config: Arc::new(config),
            db,
            registry,
        }
    }

    /// Open the database, build the SMTP transport and check it.
    ///
    /// An unreachable mail server is logged and tolerated: registration and
    /// listing still work, and confirmations report the failed send.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;

        let notifier = SmtpNotifier::new(&config.mail)?;
        match notifier.verify().await {
            Ok(()) => tracing::info!(host = %config.mail.host, port = config.mail.port, "SMTP server ready"),
            Err(e) => tracing::warn!(
                host = %config.mail.host,
                port = config.mail.port,
                error = %e,
                "SMTP server unreachable, confirmation emails will fail until it recovers"
            ),
        }

        Ok(Self::new(
            config.clone(),
            db,
            Arc::new(notifier),
            Arc::new(PngQrGenerator),
        ))
    }
}
