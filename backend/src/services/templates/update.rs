use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse};
use common::requests::TemplatePayload;
use log::{debug, info};
use serde_json::json;

/// `PUT /templates/{id}`: renames the template and replaces its checklist set with the
/// referenced checklists that exist.
pub async fn process(
    store: web::Data<Store>,
    id: web::Path<i64>,
    payload: web::Json<TemplatePayload>,
) -> Result<HttpResponse, StoreError> {
    let id = id.into_inner();
    if !store.update_template(id, &payload)? {
        debug!("Template {} not found", id);
        return Ok(HttpResponse::NotFound().json(json!({ "error": "Template not found" })));
    }

    info!("Template {} updated", id);
    Ok(HttpResponse::Ok().json(json!({ "message": "Template updated successfully" })))
}
