use actix_web::{web, HttpResponse};

use crate::store::ItemStore;

/// `GET /items`: every item, in insertion order.
pub async fn process(store: web::Data<ItemStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.list().await)
}
