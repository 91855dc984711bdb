//! Fetch wrappers for the product API.
//!
//! Every call resolves to the decoded body on a 2xx response. Anything else
//! becomes an [`ApiError`]; for error statuses the message is taken from the
//! server's `{"error": ...}` body when there is one.
//!
//! Requests go to the page's own origin by default, which is what the SPA
//! embedded in the backend wants. Set `API_BASE` at build time (for example
//! `API_BASE=http://localhost:3000 trunk serve --port 3001`) to talk to a
//! backend on another origin.

use common::model::error::ErrorBody;
use common::model::product::{Product, ProductPayload};
use gloo_net::http::{Request, Response};
use thiserror::Error;

const API_BASE: &str = match option_env!("API_BASE") {
    Some(base) => base,
    None => "",
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Сетевая ошибка: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

fn products_url() -> String {
    format!("{API_BASE}/api/products")
}

fn product_url(id: &str) -> String {
    format!("{API_BASE}/api/products/{id}")
}

pub async fn get_products() -> Result<Vec<Product>, ApiError> {
    let resp = Request::get(&products_url()).send().await?;
    Ok(ensure_ok(resp).await?.json().await?)
}

pub async fn create_product(payload: &ProductPayload) -> Result<Product, ApiError> {
    let resp = Request::post(&products_url()).json(payload)?.send().await?;
    Ok(ensure_ok(resp).await?.json().await?)
}

pub async fn update_product(id: &str, payload: &ProductPayload) -> Result<Product, ApiError> {
    let resp = Request::patch(&product_url(id)).json(payload)?.send().await?;
    Ok(ensure_ok(resp).await?.json().await?)
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&product_url(id)).send().await?;
    ensure_ok(resp).await?;
    Ok(())
}

async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }

    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => resp.status_text(),
    };
    Err(ApiError::Status {
        status: resp.status(),
        message,
    })
}
