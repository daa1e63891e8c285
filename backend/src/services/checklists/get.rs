use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse};
use log::debug;
use serde_json::json;

/// `GET /checklists/{id}`
///
/// # Returns
/// - `200 OK` with the checklist and its tasks.
/// - `404 Not Found` with `{"error": "Checklist not found"}`.
pub async fn process(
    store: web::Data<Store>,
    id: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    let id = id.into_inner();
    match store.get_checklist(id)? {
        Some(checklist) => Ok(HttpResponse::Ok().json(checklist)),
        None => {
            debug!("Checklist {} not found", id);
            Ok(HttpResponse::NotFound().json(json!({ "error": "Checklist not found" })))
        }
    }
}
