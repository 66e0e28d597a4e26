//! Route definitions for the storefront

use dioxus::prelude::*;

use crate::pages::{Categories, Home};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/categories")]
    Categories {},
}
