//! Reusable UI components

mod car_card;
mod footer;
mod section;

pub use car_card::*;
pub use footer::*;
pub use section::*;
