pub mod assets;
pub mod docs;
pub mod items;
pub mod products;
