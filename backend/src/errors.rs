//! Error responses.
//!
//! Handlers fail with an [`ApiError`]; the variant they are mounted under
//! decides how it is rendered. The `/api` surface answers with
//! `{"error": "..."}` JSON through [`JsonError`], the minimal `/items` surface
//! with a bare text body through [`TextError`]. Both map the same errors to the
//! same status codes.

use actix_web::http::StatusCode;
use actix_web::{error, web, HttpRequest, HttpResponse, ResponseError};
use common::messages;
use common::model::error::ErrorBody;
use common::validation::ValidationError;
use log::warn;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request body is not the JSON the endpoint expects.
    #[error("{}", messages::MALFORMED_BODY)]
    MalformedBody(String),

    #[error("{}", messages::ROUTE_NOT_FOUND)]
    RouteNotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn log(&self) {
        match self {
            ApiError::Validation(e) => warn!("Rejected payload: {e}"),
            ApiError::MalformedBody(detail) => warn!("Malformed request body: {detail}"),
            ApiError::Store(_) | ApiError::RouteNotFound => {}
        }
    }
}

/// [`ApiError`] rendered as an [`ErrorBody`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct JsonError(#[from] pub ApiError);

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        self.0.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        self.0.log();
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.0.to_string()))
    }
}

/// [`ApiError`] rendered as `text/plain`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct TextError(#[from] pub ApiError);

impl ResponseError for TextError {
    fn status_code(&self) -> StatusCode {
        self.0.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        self.0.log();
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.0.to_string())
    }
}

impl From<StoreError> for JsonError {
    fn from(err: StoreError) -> Self {
        JsonError(err.into())
    }
}

impl From<ValidationError> for JsonError {
    fn from(err: ValidationError) -> Self {
        JsonError(err.into())
    }
}

impl From<StoreError> for TextError {
    fn from(err: StoreError) -> Self {
        TextError(err.into())
    }
}

impl From<ValidationError> for TextError {
    fn from(err: ValidationError) -> Self {
        TextError(err.into())
    }
}

/// JSON extractor config whose failures come back as `{"error": ...}`.
pub fn json_body_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
            JsonError(ApiError::MalformedBody(err.to_string())).into()
        })
}

/// JSON extractor config whose failures come back as plain text.
pub fn text_body_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
            TextError(ApiError::MalformedBody(err.to_string())).into()
        })
}
