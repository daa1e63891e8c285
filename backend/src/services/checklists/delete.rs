use crate::store::Store;
use actix_web::{web, HttpResponse};
use log::{debug, error, info};
use serde_json::json;

/// `DELETE /checklists/{id}`
///
/// Unlike the other handlers, a storage failure here is reported to the client with
/// its details instead of the generic error body.
///
/// # Returns
/// - `200 OK` once the checklist and its tasks are gone.
/// - `404 Not Found` when the checklist does not exist.
/// - `500 Internal Server Error` with `{"error": "An error occurred while deleting the checklist: ..."}`.
pub async fn process(store: web::Data<Store>, id: web::Path<i64>) -> HttpResponse {
    let id = id.into_inner();
    match store.delete_checklist(id) {
        Ok(true) => {
            info!("Checklist {} and its tasks deleted", id);
            HttpResponse::Ok()
                .json(json!({ "message": "Checklist and associated tasks deleted successfully" }))
        }
        Ok(false) => {
            debug!("Checklist {} not found", id);
            HttpResponse::NotFound().json(json!({ "error": "Checklist not found" }))
        }
        Err(e) => {
            let message = format!("An error occurred while deleting the checklist: {}", e);
            error!("{}", message);
            HttpResponse::InternalServerError().json(json!({ "error": message }))
        }
    }
}
