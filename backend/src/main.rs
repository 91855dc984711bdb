mod config;
mod errors;
mod services;
mod store;

use crate::config::Config;
use crate::store::ids::{ShortIdGenerator, TimestampIdGenerator};
use crate::store::{seed, ItemStore, ProductStore};
use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

fn cors(origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(origin)
        .allowed_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    let (products, items) = if config.seed {
        (seed::products(), seed::items())
    } else {
        (
            ProductStore::new(ShortIdGenerator::default()),
            ItemStore::new(TimestampIdGenerator::new()),
        )
    };
    let products = web::Data::new(products);
    let items = web::Data::new(items);

    let url = config.url();
    info!("Server running at {url}");
    info!("Products in store: {}", products.len().await);
    info!("Items in store: {}", items.len().await);
    info!("API docs: {url}/api-docs");

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&server_config.cors_origin))
            .wrap(middleware::Logger::new("%r %s %Dms"))
            .app_data(products.clone())
            .app_data(items.clone())
            .service(services::products::configure_routes(server_config.json_limit))
            .service(services::items::configure_routes(server_config.json_limit))
            .service(services::docs::configure_routes())
            .default_service(web::route().to(services::assets::process))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
