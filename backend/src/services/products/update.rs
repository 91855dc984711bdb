use actix_web::{web, HttpResponse};
use common::model::product::ProductPayload;

use crate::errors::JsonError;
use crate::store::ProductStore;

/// `PATCH /api/products/{id}`: merge the fields present in the body into the
/// stored product and leave the others untouched.
///
/// An unknown id is reported before the body is validated, and an invalid
/// field rejects the whole patch.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    operation_id = "updateProduct",
    params(("id" = String, Path, description = "ID товара")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Товар обновлен", body = Product),
        (status = 400, description = "Ошибка валидации", body = ErrorBody),
        (status = 404, description = "Товар не найден", body = ErrorBody)
    )
)]
pub async fn process(
    id: web::Path<String>,
    payload: web::Json<ProductPayload>,
    store: web::Data<ProductStore>,
) -> Result<HttpResponse, JsonError> {
    let patch = payload.into_inner().into_patch();

    let product = store
        .update(&id, |product| {
            patch?.apply(product);
            Ok::<_, JsonError>(())
        })
        .await?;

    Ok(HttpResponse::Ok().json(product))
}
