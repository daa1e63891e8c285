use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse};
use common::requests::ChecklistPayload;
use log::{debug, info};
use serde_json::json;

/// `PUT /checklists/{id}`
///
/// The submitted `tasks` array is the checklist's new complete task set: tasks with an
/// `id` are overwritten, tasks without one are created, and owned tasks left out of
/// the array are deleted.
///
/// # Returns
/// - `200 OK` with an acknowledgment.
/// - `404 Not Found` when the checklist does not exist.
pub async fn process(
    store: web::Data<Store>,
    id: web::Path<i64>,
    payload: web::Json<ChecklistPayload>,
) -> Result<HttpResponse, StoreError> {
    let id = id.into_inner();
    if !store.update_checklist(id, &payload)? {
        debug!("Checklist {} not found", id);
        return Ok(HttpResponse::NotFound().json(json!({ "error": "Checklist not found" })));
    }

    info!("Checklist {} updated", id);
    Ok(HttpResponse::Ok().json(json!({ "message": "Checklist updated successfully" })))
}
