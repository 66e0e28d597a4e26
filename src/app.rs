//! Root application component

use dioxus::prelude::*;

use crate::catalog::CatalogProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Catalog context provider wraps the entire app
        CatalogProvider {
            Router::<Route> {}
        }
    }
}
