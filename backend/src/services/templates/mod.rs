//! # Template Service Module
//!
//! Routes every request under `/templates` to its handler. A template only
//! references its checklists: creating, updating or deleting a template moves
//! checklists in and out of it, but never creates or deletes a checklist.
//!
//! ## Sub-modules:
//! - `list`: every template, with its checklists only when it has any.
//! - `get`: one template with its (possibly empty) checklist list.
//! - `create`: a new template attached to the referenced checklists.
//! - `update`: renames a template and replaces its whole checklist set.
//! - `delete`: removes a template, releasing its checklists.

mod create;
mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

/// The base path for all template endpoints.
const API_PATH: &str = "/templates";

/// Configures and returns the Actix `Scope` for the template routes.
///
/// # Registered Routes:
///
/// *   **`GET /templates`** → `list::process`
/// *   **`POST /templates`** → `create::process`
/// *   **`GET /templates/{id}`** → `get::process`
/// *   **`PUT /templates/{id}`** → `update::process`
/// *   **`DELETE /templates/{id}`** → `delete::process`
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
