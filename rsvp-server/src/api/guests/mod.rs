//! Guest API
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /api/invitados | register |
//! | GET | /api/invitados | list |
//! | POST | /api/invitados/confirmar | confirm |
//! | GET | /api/invitados/confirmados | list_confirmed |
//! | GET | /api/invitados/codigo/{code} | get_by_code |
//! | PUT | /api/invitados/{id} | update |
//! | DELETE | /api/invitados/{id} | delete |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/invitados", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::register).get(handler::list))
        .route("/confirmar", post(handler::confirm))
        .route("/confirmados", get(handler::list_confirmed))
        .route("/codigo/{code}", get(handler::get_by_code))
        .route("/{id}", put(handler::update).delete(handler::delete))
}
