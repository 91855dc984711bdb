//! State of the products page.
//!
//! The page moves through three states:
//!
//! ```text
//! Loading --(list fetched or failed)--> Loaded <--(cancel / saved)--> ModalOpen
//! ```
//!
//! The product list is reconciled locally after each successful call (append
//! on create, replace by id on update, remove on delete) so the UI reacts
//! immediately. `update.rs` then refetches the list in the background and
//! hands it to [`ProductsPage::replace_products`], which brings the page back
//! in line with changes made by other clients.

use common::model::product::Product;

#[derive(Debug, Clone, PartialEq)]
pub enum ModalMode {
    Create,
    Edit(Product),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Loaded,
    ModalOpen(ModalMode),
}

pub struct ProductsPage {
    pub products: Vec<Product>,
    pub state: PageState,
    /// Guard to run the initial fetch only on the first render.
    pub mounted: bool,
}

impl ProductsPage {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            state: PageState::Loading,
            mounted: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == PageState::Loading
    }

    pub fn modal(&self) -> Option<&ModalMode> {
        match &self.state {
            PageState::ModalOpen(mode) => Some(mode),
            _ => None,
        }
    }

    /// Ends the initial load. `None` means the fetch failed and the list stays empty.
    pub fn finish_loading(&mut self, products: Option<Vec<Product>>) {
        if let Some(products) = products {
            self.products = products;
        }
        if self.is_loading() {
            self.state = PageState::Loaded;
        }
    }

    /// Takes the server's list as the new truth without changing the page state.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Returns whether the modal was opened; it cannot open while loading.
    pub fn open_create(&mut self) -> bool {
        self.open(ModalMode::Create)
    }

    pub fn open_edit(&mut self, product: Product) -> bool {
        self.open(ModalMode::Edit(product))
    }

    fn open(&mut self, mode: ModalMode) -> bool {
        if self.is_loading() {
            return false;
        }
        self.state = PageState::ModalOpen(mode);
        true
    }

    pub fn close_modal(&mut self) {
        if self.modal().is_some() {
            self.state = PageState::Loaded;
        }
    }

    pub fn product_created(&mut self, product: Product) {
        self.products.push(product);
        self.close_modal();
    }

    pub fn product_updated(&mut self, product: Product) {
        for existing in self.products.iter_mut().filter(|p| p.id == product.id) {
            *existing = product.clone();
        }
        self.close_modal();
    }

    pub fn product_deleted(&mut self, id: &str) {
        self.products.retain(|p| p.id != id);
    }
}
