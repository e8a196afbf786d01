//! Guest RSVP server
//!
//! Invitations for a single event: guests are registered with a reservation
//! code, confirm attendance (plus companions) with that code, and receive a
//! QR code by email.
//!
//! ```text
//! rsvp-server/src/
//! ├── core/        # config, state, server lifecycle
//! ├── registry/    # guest workflow + store trait
//! ├── db/          # SQLite pool, migrations, repository
//! ├── notify/      # mail trait, SMTP transport, email template
//! ├── qr.rs        # QR rendering
//! ├── api/         # axum routes and handlers
//! ├── middleware/  # request logging
//! └── utils/       # logging setup, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod notify;
pub mod qr;
pub mod registry;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use registry::GuestRegistry;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and initialize logging from it.
pub fn setup_environment() -> anyhow::Result<Config> {
    // a missing .env is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}
