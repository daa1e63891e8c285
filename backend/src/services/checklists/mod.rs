//! # Checklist Service Module
//!
//! Routes every request under `/checklists` to its handler. A checklist owns its
//! tasks, so all task changes go through the checklist endpoints.
//!
//! ## Sub-modules:
//! - `list`: every checklist with its tasks.
//! - `get`: one checklist with its tasks.
//! - `create`: a new checklist together with its initial tasks.
//! - `update`: overwrites a checklist; the submitted tasks become its complete task set.
//! - `delete`: removes a checklist and every task it owns.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all checklist endpoints.
const API_PATH: &str = "/checklists";

/// Configures and returns the Actix `Scope` for the checklist routes.
///
/// # Registered Routes:
///
/// *   **`GET /checklists`** → `list::process`
/// *   **`POST /checklists`** → `create::process`
/// *   **`GET /checklists/{id}`** → `get::process`
/// *   **`PUT /checklists/{id}`** → `update::process`
/// *   **`DELETE /checklists/{id}`** → `delete::process`
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
