use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse};
use common::requests::TemplatePayload;
use log::info;
use serde_json::json;

/// `POST /templates`
///
/// Each referenced checklist that exists is attached to the new template, leaving any
/// template it belonged to before. Unknown ids are skipped without an error.
pub async fn process(
    store: web::Data<Store>,
    payload: web::Json<TemplatePayload>,
) -> Result<HttpResponse, StoreError> {
    let id = store.create_template(&payload)?;
    info!("Template {} created", id);
    Ok(HttpResponse::Created().json(json!({ "message": "Template created successfully" })))
}
