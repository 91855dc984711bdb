use actix_web::{web, HttpResponse};

use crate::errors::JsonError;
use crate::store::ProductStore;

/// `GET /api/products/{id}`
///
/// # Returns
/// - `200 OK` with the product.
/// - `404 Not Found` with `{"error": "Товар не найден"}` when no product has that id.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    operation_id = "getProduct",
    params(("id" = String, Path, description = "ID товара")),
    responses(
        (status = 200, description = "Данные товара", body = Product),
        (status = 404, description = "Товар не найден", body = ErrorBody)
    )
)]
pub async fn process(
    id: web::Path<String>,
    store: web::Data<ProductStore>,
) -> Result<HttpResponse, JsonError> {
    let product = store.get(&id).await?;
    Ok(HttpResponse::Ok().json(product))
}
