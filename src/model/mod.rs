//! Pure data structures exchanged with the storefront.

pub mod product;

pub use product::*;
