use actix_web::{web, HttpResponse};

use crate::store::ProductStore;

/// `GET /api/products`: every product, in insertion order.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    operation_id = "listProducts",
    responses(
        (status = 200, description = "Список всех товаров", body = [Product])
    )
)]
pub async fn process(store: web::Data<ProductStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.list().await)
}
