use actix_web::{web, HttpResponse};
use common::model::product::{Product, ProductPayload};
use log::info;

use crate::errors::JsonError;
use crate::store::ProductStore;

/// `POST /api/products`
///
/// All five fields are required. Text fields are trimmed and numbers cast
/// before the product gets its id and is appended to the store; a payload
/// that fails validation never reaches the store.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    operation_id = "createProduct",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Товар успешно создан", body = Product),
        (status = 400, description = "Ошибка валидации", body = ErrorBody)
    )
)]
pub async fn process(
    payload: web::Json<ProductPayload>,
    store: web::Data<ProductStore>,
) -> Result<HttpResponse, JsonError> {
    let new = payload.into_inner().into_new_product()?;
    let product = store.create(|id| Product::from_new(id, new)).await;

    info!("Created product {} ({})", product.id, product.name);
    Ok(HttpResponse::Created().json(product))
}
