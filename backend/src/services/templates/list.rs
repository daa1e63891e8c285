use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse};
use serde_json::json;

/// `GET /templates`
///
/// Templates without associated checklists are listed without a `checklists` key at
/// all, not with an empty array. Clients depend on that shape.
pub async fn process(store: web::Data<Store>) -> Result<HttpResponse, StoreError> {
    let templates = store.list_templates()?;
    Ok(HttpResponse::Ok().json(json!({ "templates": templates })))
}
