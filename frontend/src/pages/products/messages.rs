use common::model::product::{Product, ProductPayload};

use crate::api::ApiError;

pub enum Msg {
    /// Result of the initial list fetch.
    Loaded(Result<Vec<Product>, ApiError>),
    /// Result of a background refetch after a mutation.
    Refreshed(Result<Vec<Product>, ApiError>),
    OpenCreate,
    OpenEdit(Product),
    CloseModal,
    Submit(ProductPayload),
    Created(Result<Product, ApiError>),
    Updated(Result<Product, ApiError>),
    Delete(String),
    Deleted(String, Result<(), ApiError>),
}
