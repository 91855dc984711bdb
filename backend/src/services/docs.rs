//! API documentation: the OpenAPI document of the product API and a Swagger
//! UI page that renders it. The UI assets are loaded from the
//! `swagger-ui-dist` CDN by the browser; only the page shell is served here.

use actix_web::web::{get, scope};
use actix_web::{HttpRequest, HttpResponse, Scope};
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

use crate::services::products::ProductsApi;

const API_PATH: &str = "/api-docs";

const SWAGGER_UI_PAGE: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>API интернет-магазина</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
"#;

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(swagger_ui))
        .route("/", get().to(swagger_ui))
        .route("/openapi.json", get().to(process))
}

/// `GET /api-docs`: interactive documentation of the product API.
pub async fn swagger_ui() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(SWAGGER_UI_PAGE)
}

/// `GET /api-docs/openapi.json`. The server entry points at whatever host the
/// document was requested through.
pub async fn process(req: HttpRequest) -> HttpResponse {
    let mut doc = ProductsApi::openapi();
    let info = req.connection_info();
    doc.servers = Some(vec![Server::new(format!(
        "{}://{}",
        info.scheme(),
        info.host()
    ))]);
    HttpResponse::Ok().json(doc)
}
