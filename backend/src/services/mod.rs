//! HTTP resource handlers.
//!
//! Each resource lives in its own module with one sub-module per verb, and exposes a
//! `configure_routes()` scope. `configure` mounts all of them and is shared by `main`
//! and the handler tests, so both serve exactly the same route table.

pub mod checklists;
pub mod templates;

use crate::store::StoreError;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use log::{debug, error};
use serde_json::json;

/// Registers every resource scope on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(checklists::configure_routes())
        .service(templates::configure_routes());
}

/// JSON extractor settings: bodies up to `limit` bytes, and a body that cannot be read
/// at all is answered with `400 {"error": ...}` instead of a plain-text message.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            debug!("Rejected request body: {}", err);
            let body = json!({ "error": err.to_string() });
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        })
}

/// Unexpected storage failures surface as a generic `500`.
impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!("Unhandled storage error: {}", self);
        HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
    }
}

#[cfg(test)]
pub(crate) fn test_store() -> web::Data<crate::store::Store> {
    web::Data::new(crate::store::Store::in_memory().unwrap())
}
