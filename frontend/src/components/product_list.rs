use common::model::product::Product;
use yew::{html, Callback, Component, Context, Html, Properties};

use crate::components::product_card::ProductCard;

#[derive(Properties, PartialEq)]
pub struct ProductListProps {
    pub products: Vec<Product>,
    pub on_edit: Callback<Product>,
    pub on_delete: Callback<String>,
}

pub struct ProductList;

impl Component for ProductList {
    type Message = ();
    type Properties = ProductListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        if props.products.is_empty() {
            return html! { <div class="loading">{ "Товаров пока нет" }</div> };
        }

        html! {
            <div class="list">
                { for props.products.iter().map(|product| html! {
                    <ProductCard
                        key={product.id.clone()}
                        product={product.clone()}
                        on_edit={props.on_edit.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                }) }
            </div>
        }
    }
}
