use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse};
use common::requests::ChecklistPayload;
use log::info;
use serde_json::json;

/// `POST /checklists`: stores the checklist and all of its tasks as one unit.
///
/// The created entity is not echoed back, only an acknowledgment with `201 Created`.
pub async fn process(
    store: web::Data<Store>,
    payload: web::Json<ChecklistPayload>,
) -> Result<HttpResponse, StoreError> {
    let id = store.create_checklist(&payload)?;
    info!("Checklist {} created with {} tasks", id, payload.tasks.len());
    Ok(HttpResponse::Created().json(json!({ "message": "Checklist created successfully" })))
}
