//! # Product Service Module
//!
//! CRUD endpoints of the full product variant, mounted under `/api/products`.
//! Every failure is answered with an `{"error": ...}` JSON body.
//!
//! ## Registered Routes:
//!
//! *   **`GET /`** (`list::process`): every product in insertion order.
//! *   **`POST /`** (`create::process`): validate the five required fields,
//!     assign a fresh six character id, append. `201 Created`.
//! *   **`GET /{id}`** (`get::process`): one product or `404`.
//! *   **`PATCH /{id}`** (`update::process`): partial merge of the fields
//!     present in the body. `404` for unknown ids.
//! *   **`DELETE /{id}`** (`delete::process`): `204 No Content`, `404` for
//!     unknown ids.

mod create;
mod delete;
mod get;
mod list;
mod update;

#[cfg(test)]
mod tests;

use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;
use common::model::error::ErrorBody;
use common::model::product::{Product, ProductPayload};
use utoipa::OpenApi;

use crate::errors::json_body_config;

/// The base path for all product endpoints.
const API_PATH: &str = "/api/products";

pub fn configure_routes(json_limit: usize) -> Scope {
    scope(API_PATH)
        .app_data(json_body_config(json_limit))
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

/// OpenAPI description of the product endpoints, served by `services::docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API интернет-магазина",
        version = "1.0.0",
        description = "API для управления товарами в интернет-магазине"
    ),
    paths(
        list::process,
        get::process,
        create::process,
        update::process,
        delete::process
    ),
    components(schemas(Product, ProductPayload, ErrorBody)),
    tags((name = "Products", description = "Операции с товарами"))
)]
pub struct ProductsApi;
