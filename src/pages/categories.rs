//! Categories page: the destination behind the "View All" links.

use dioxus::prelude::*;

use crate::catalog::{use_catalog, Catalog};
use crate::components::{CardGrid, SiteFooter};

/// Every listing from every catalog in one grid.
#[component]
pub fn Categories() -> Element {
    let catalog = use_catalog();

    let mut all_cars = Vec::new();
    for collection in Catalog::variants() {
        all_cars.extend(catalog.listings(*collection));
    }

    rsx! {
        div {
            class: "bg-[#f6f7f9] min-h-screen p-4 sm:p-6 lg:p-20 flex flex-col gap-10",

            section {
                class: "w-full flex flex-col gap-4",
                h2 { class: "text-gray-500 text-xl font-semibold mb-4", "All Cars" }
                CardGrid { listings: all_cars, defaults: catalog.defaults.clone() }
            }

            SiteFooter {}
        }
    }
}
