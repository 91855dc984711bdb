//! Embedded SPA assets and the catch-all for unmatched routes.
//!
//! `build.rs` copies the built frontend (`frontend/dist`) into
//! `backend/static/dist`, which is compiled into the binary. `GET /` serves
//! `index.html`, `GET /<file>` serves that file. Any request that matches
//! neither an API route nor an embedded file gets `404 {"error": "Маршрут не найден"}`.

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

use crate::errors::{ApiError, JsonError};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn process(req: HttpRequest) -> Result<HttpResponse, JsonError> {
    serve_from(&STATIC_DIR, &req)
}

fn serve_from(dir: &Dir<'_>, req: &HttpRequest) -> Result<HttpResponse, JsonError> {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return Err(ApiError::RouteNotFound.into());
    }

    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            Ok(HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec()))
        }
        None => Err(ApiError::RouteNotFound.into()),
    }
}
