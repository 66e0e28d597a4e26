//! Storefront pages

mod categories;
mod home;

pub use categories::*;
pub use home::*;
