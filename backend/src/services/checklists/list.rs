use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse};
use serde_json::json;

/// `GET /checklists`: every checklist with its nested tasks, wrapped in `{"checklists": [...]}`.
pub async fn process(store: web::Data<Store>) -> Result<HttpResponse, StoreError> {
    let checklists = store.list_checklists()?;
    Ok(HttpResponse::Ok().json(json!({ "checklists": checklists })))
}
