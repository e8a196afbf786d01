//! Shared types for the RSVP service
//!
//! Error codes, API response structures, the guest model and a few
//! utilities used by the server and its clients.

pub mod error;
pub mod models;
pub mod util;
