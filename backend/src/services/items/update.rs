use actix_web::{web, HttpResponse};
use common::model::item::ItemPayload;

use crate::errors::TextError;
use crate::store::ItemStore;

/// `PATCH /items/{id}`: partial merge, `404` before any body validation.
pub async fn process(
    id: web::Path<String>,
    payload: web::Json<ItemPayload>,
    store: web::Data<ItemStore>,
) -> Result<HttpResponse, TextError> {
    let patch = payload.into_inner().into_patch();

    let item = store
        .update(&id, |item| {
            patch?.apply(item);
            Ok::<_, TextError>(())
        })
        .await?;

    Ok(HttpResponse::Ok().json(item))
}
