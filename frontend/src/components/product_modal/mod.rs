//! Modal editor for creating or editing one product.
//!
//! The modal owns only its [`ProductForm`]; it never talks to the API. A valid
//! form is emitted through `on_submit` and the products page decides whether
//! that means create or update. Validation failures are shown in an alert and
//! keep the modal open.

use common::model::product::ProductPayload;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

mod form;

use form::{Field, ProductForm};

use crate::helpers::alert;
use crate::pages::products::ModalMode;

#[derive(Properties, PartialEq)]
pub struct ProductModalProps {
    pub mode: ModalMode,
    pub on_close: Callback<()>,
    pub on_submit: Callback<ProductPayload>,
}

pub enum Msg {
    Edit(Field, String),
    Submit,
}

pub struct ProductModal {
    form: ProductForm,
}

impl ProductModal {
    fn is_edit(ctx: &Context<Self>) -> bool {
        matches!(ctx.props().mode, ModalMode::Edit(_))
    }

    fn input(&self, ctx: &Context<Self>, label: &str, field: Field, kind: &str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            Msg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
        });

        html! {
            <div class="formGroup">
                <label>{ label }</label>
                <input
                    type={kind.to_string()}
                    value={self.form.get(field).to_string()}
                    {oninput}
                />
            </div>
        }
    }
}

impl Component for ProductModal {
    type Message = Msg;
    type Properties = ProductModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let product = match &ctx.props().mode {
            ModalMode::Edit(product) => Some(product),
            ModalMode::Create => None,
        };
        Self {
            form: ProductForm::from_product(product),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.form.set(field, value);
                true
            }
            Msg::Submit => {
                match self.form.validate() {
                    Ok(payload) => ctx.props().on_submit.emit(payload),
                    Err(e) => alert(&e.to_string()),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let is_edit = Self::is_edit(ctx);

        let on_close = ctx.props().on_close.clone();
        let close = Callback::from(move |_: MouseEvent| on_close.emit(()));
        let on_description = link.callback(|e: InputEvent| {
            Msg::Edit(
                Field::Description,
                e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            )
        });

        html! {
            <div class="modalBackdrop" onclick={close.clone()}>
                <div class="modal" onclick={|e: MouseEvent| e.stop_propagation()}>
                    <div class="modalHeader">
                        <div class="modalTitle">
                            { if is_edit { "Редактировать товар" } else { "Добавить товар" } }
                        </div>
                        <button class="modalClose" onclick={close.clone()}>{ "✕" }</button>
                    </div>

                    { self.input(ctx, "Название", Field::Name, "text") }
                    { self.input(ctx, "Категория", Field::Category, "text") }
                    <div class="formGroup">
                        <label>{ "Описание" }</label>
                        <textarea
                            rows="3"
                            value={self.form.description.clone()}
                            oninput={on_description}
                        />
                    </div>
                    { self.input(ctx, "Цена, ₽", Field::Price, "text") }
                    { self.input(ctx, "Количество на складе", Field::Stock, "number") }

                    <div class="modalFooter">
                        <button class="btn" onclick={close}>{ "Отмена" }</button>
                        <button
                            class="btn btn--primary"
                            onclick={link.callback(|_| Msg::Submit)}
                        >
                            { if is_edit { "Сохранить" } else { "Создать" } }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
