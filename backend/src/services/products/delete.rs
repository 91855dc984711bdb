use actix_web::{web, HttpResponse};
use log::info;

use crate::errors::JsonError;
use crate::store::ProductStore;

/// `DELETE /api/products/{id}`: `204 No Content` on success, `404` when the
/// product is already gone.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    operation_id = "deleteProduct",
    params(("id" = String, Path, description = "ID товара")),
    responses(
        (status = 204, description = "Товар успешно удален (нет тела ответа)"),
        (status = 404, description = "Товар не найден", body = ErrorBody)
    )
)]
pub async fn process(
    id: web::Path<String>,
    store: web::Data<ProductStore>,
) -> Result<HttpResponse, JsonError> {
    let removed = store.delete(&id).await?;

    info!("Deleted product {} ({})", removed.id, removed.name);
    Ok(HttpResponse::NoContent().finish())
}
