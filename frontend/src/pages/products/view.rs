//! View rendering for the products page: header, toolbar with the product
//! count, the list (or a loading notice), footer, and the modal editor when
//! it is open.

use yew::html::Scope;
use yew::prelude::*;

use crate::components::product_list::ProductList;
use crate::components::product_modal::ProductModal;
use crate::helpers::current_year;

use super::messages::Msg;
use super::state::ProductsPage;

pub fn view(page: &ProductsPage, ctx: &Context<ProductsPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="page">
            <header class="header">
                <div class="headerInner">
                    <div class="brand">{ "🛒 Интернет-магазин" }</div>
                    <div>{ "Rust + Yew" }</div>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    { build_toolbar(page, link) }
                    { build_content(page, link) }
                </div>
            </main>

            <footer class="footer">
                <div class="footerInner">
                    { format!("© {} Интернет-магазин", current_year()) }
                </div>
            </footer>

            { build_modal(page, link) }
        </div>
    }
}

fn build_toolbar(page: &ProductsPage, link: &Scope<ProductsPage>) -> Html {
    html! {
        <div class="toolbar">
            <h1>{ format!("Товары ({})", page.products.len()) }</h1>
            <button
                class="btn btn--primary"
                disabled={page.is_loading()}
                onclick={link.callback(|_| Msg::OpenCreate)}
            >
                { "+ Добавить товар" }
            </button>
        </div>
    }
}

fn build_content(page: &ProductsPage, link: &Scope<ProductsPage>) -> Html {
    if page.is_loading() {
        return html! { <div class="loading">{ "Загрузка товаров..." }</div> };
    }

    html! {
        <ProductList
            products={page.products.clone()}
            on_edit={link.callback(Msg::OpenEdit)}
            on_delete={link.callback(Msg::Delete)}
        />
    }
}

fn build_modal(page: &ProductsPage, link: &Scope<ProductsPage>) -> Html {
    match page.modal() {
        Some(mode) => html! {
            <ProductModal
                mode={mode.clone()}
                on_close={link.callback(|_| Msg::CloseModal)}
                on_submit={link.callback(Msg::Submit)}
            />
        },
        None => html! {},
    }
}
