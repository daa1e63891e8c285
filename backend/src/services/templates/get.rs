//! # Template Retrieval Service
//!
//! Backend logic for `GET /templates/{template_id}`. The template's checklists are
//! read from the `checklists` table through their `template_id` reference and
//! returned as `{id, name}` pairs. The list is always present in this response,
//! even when it is empty.

use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse};
use log::debug;
use serde_json::json;

/// Actix web handler for the `GET /templates/{template_id}` endpoint.
///
/// # Returns
/// - `200 OK` with the `Template` object as a JSON payload.
/// - `404 Not Found` with `{"error": "Template not found"}`.
pub async fn process(
    store: web::Data<Store>,
    template_id: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    let template_id = template_id.into_inner();
    match store.get_template(template_id)? {
        Some(template) => Ok(HttpResponse::Ok().json(template)),
        None => {
            debug!("Template {} not found", template_id);
            Ok(HttpResponse::NotFound().json(json!({ "error": "Template not found" })))
        }
    }
}
