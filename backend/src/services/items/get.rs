use actix_web::{web, HttpResponse};

use crate::errors::TextError;
use crate::store::ItemStore;

pub async fn process(
    id: web::Path<String>,
    store: web::Data<ItemStore>,
) -> Result<HttpResponse, TextError> {
    Ok(HttpResponse::Ok().json(store.get(&id).await?))
}
