use actix_web::{web, HttpResponse};
use common::messages;
use log::info;

use crate::errors::TextError;
use crate::store::ItemStore;

/// `DELETE /items/{id}`: answers `200` with a plain-text confirmation rather
/// than `204`.
pub async fn process(
    id: web::Path<String>,
    store: web::Data<ItemStore>,
) -> Result<HttpResponse, TextError> {
    let removed = store.delete(&id).await?;

    info!("Deleted item {} ({})", removed.id, removed.name);
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(messages::ITEM_DELETED))
}
