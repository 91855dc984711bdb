//! Products page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic and view rendering.
//!
//! On first render the page fetches the product list; everything after that
//! is driven by messages handled in `update.rs`.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{ModalMode, ProductsPage};

use crate::api;

impl Component for ProductsPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ProductsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.mounted {
            self.mounted = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(api::get_products().await));
            });
        }
    }
}
