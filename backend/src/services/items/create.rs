use actix_web::{web, HttpResponse};
use common::model::item::{Item, ItemPayload};
use log::info;

use crate::errors::TextError;
use crate::store::ItemStore;

/// `POST /items`: `name` and `price` are both required. The id is the
/// creation time in epoch milliseconds.
pub async fn process(
    payload: web::Json<ItemPayload>,
    store: web::Data<ItemStore>,
) -> Result<HttpResponse, TextError> {
    let new = payload.into_inner().into_new_item()?;
    let item = store.create(|id| Item::from_new(id, new)).await;

    info!("Created item {} ({})", item.id, item.name);
    Ok(HttpResponse::Created().json(item))
}
