//! Update function for the products page.
//!
//! Elm-style: takes the page state, the `Context` and a `Msg`, mutates the
//! state and returns whether to re-render. API calls are spawned here and
//! report back through follow-up messages (`Created`, `Updated`, `Deleted`,
//! `Refreshed`). Failures are logged to the console and shown in a blocking
//! alert; nothing is retried.

use common::model::product::ProductPayload;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::helpers::{alert, confirm, show_toast};

use super::messages::Msg;
use super::state::{ModalMode, ProductsPage};

const LOAD_FAILED: &str = "Ошибка загрузки товаров. Убедитесь, что сервер запущен.";
const SAVE_FAILED: &str = "Ошибка при сохранении товара";
const DELETE_FAILED: &str = "Ошибка при удалении товара";
const CONFIRM_DELETE: &str = "Удалить этот товар?";

pub fn update(page: &mut ProductsPage, ctx: &Context<ProductsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(Ok(products)) => {
            page.finish_loading(Some(products));
            true
        }
        Msg::Loaded(Err(e)) => {
            report(&e);
            alert(LOAD_FAILED);
            page.finish_loading(None);
            true
        }
        Msg::Refreshed(Ok(products)) => {
            page.replace_products(products);
            true
        }
        Msg::Refreshed(Err(e)) => {
            report(&e);
            false
        }
        Msg::OpenCreate => page.open_create(),
        Msg::OpenEdit(product) => page.open_edit(product),
        Msg::CloseModal => {
            page.close_modal();
            true
        }
        Msg::Submit(payload) => {
            submit(page, ctx, payload);
            false
        }
        Msg::Created(Ok(product)) => {
            show_toast(&format!("Товар «{}» добавлен", product.name));
            page.product_created(product);
            refresh(ctx);
            true
        }
        Msg::Updated(Ok(product)) => {
            show_toast(&format!("Товар «{}» сохранён", product.name));
            page.product_updated(product);
            refresh(ctx);
            true
        }
        Msg::Created(Err(e)) | Msg::Updated(Err(e)) => {
            report(&e);
            alert(SAVE_FAILED);
            false
        }
        Msg::Delete(id) => {
            if confirm(CONFIRM_DELETE) {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api::delete_product(&id).await;
                    link.send_message(Msg::Deleted(id, result));
                });
            }
            false
        }
        Msg::Deleted(id, Ok(())) => {
            page.product_deleted(&id);
            refresh(ctx);
            true
        }
        Msg::Deleted(_, Err(e)) => {
            report(&e);
            alert(DELETE_FAILED);
            false
        }
    }
}

/// Sends the modal's payload as a create or an update, depending on how the
/// modal was opened.
fn submit(page: &ProductsPage, ctx: &Context<ProductsPage>, payload: ProductPayload) {
    let link = ctx.link().clone();
    match page.modal() {
        Some(ModalMode::Create) => spawn_local(async move {
            link.send_message(Msg::Created(api::create_product(&payload).await));
        }),
        Some(ModalMode::Edit(product)) => {
            let id = product.id.clone();
            spawn_local(async move {
                link.send_message(Msg::Updated(api::update_product(&id, &payload).await));
            })
        }
        None => {}
    }
}

fn refresh(ctx: &Context<ProductsPage>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::Refreshed(api::get_products().await));
    });
}

fn report(e: &ApiError) {
    gloo_console::error!(e.to_string());
}
