pub mod error;
pub mod item;
pub mod numeric;
pub mod product;
