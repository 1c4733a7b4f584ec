//! Core types for FashionShop.

pub mod cart;
pub mod product;
pub mod rating;

pub use cart::{Cart, CartLine};
pub use product::{Product, Review};
pub use rating::render_stars;
