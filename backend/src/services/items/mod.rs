//! Minimal `/items` variant: `{id, name, price}` records keyed by creation
//! timestamp, with plain-text error bodies and a plain-text delete
//! confirmation instead of `204`.
//!
//! Ids are numbers, path segments are strings. The store reads the segment as
//! a number before comparing, so `/items/7` and `/items/007` find the same item
//! and `/items/abc` finds none.

mod create;
mod delete;
mod get;
mod list;
mod update;


use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;

use crate::errors::text_body_config;

const API_PATH: &str = "/items";

pub fn configure_routes(json_limit: usize) -> Scope {
    scope(API_PATH)
        .app_data(text_body_config(json_limit))
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
