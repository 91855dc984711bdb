use common::model::product::Product;
use yew::{html, Callback, Component, Context, Html, Properties};

use crate::helpers::format_price;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_edit: Callback<Product>,
    pub on_delete: Callback<String>,
}

/// One product with its edit and delete buttons.
pub struct ProductCard;

impl Component for ProductCard {
    type Message = ();
    type Properties = ProductCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let product = &props.product;

        let on_edit = {
            let on_edit = props.on_edit.clone();
            let product = product.clone();
            Callback::from(move |_| on_edit.emit(product.clone()))
        };
        let on_delete = {
            let on_delete = props.on_delete.clone();
            let id = product.id.clone();
            Callback::from(move |_| on_delete.emit(id.clone()))
        };

        html! {
            <div class="card">
                <div class="card__category">{ &product.category }</div>
                <h3 class="card__name">{ &product.name }</h3>
                <div class="card__description">{ &product.description }</div>
                <div class="card__price">{ format_price(product.price) }</div>
                <div class="card__stock">{ format!("На складе: {} шт.", product.stock) }</div>
                <div class="card__actions">
                    <button class="btn" onclick={on_edit}>{ "Редактировать" }</button>
                    <button class="btn btn--danger" onclick={on_delete}>{ "Удалить" }</button>
                </div>
            </div>
        }
    }
}
