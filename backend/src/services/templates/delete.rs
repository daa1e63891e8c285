use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse};
use log::{debug, info};
use serde_json::json;

/// `DELETE /templates/{id}`: the template's checklists stay, unassigned.
pub async fn process(
    store: web::Data<Store>,
    id: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    let id = id.into_inner();
    if !store.delete_template(id)? {
        debug!("Template {} not found", id);
        return Ok(HttpResponse::NotFound().json(json!({ "error": "Template not found" })));
    }

    info!("Template {} deleted", id);
    Ok(HttpResponse::Ok().json(json!({ "message": "Template deleted successfully" })))
}
