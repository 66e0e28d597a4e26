//! Titled card-grid sections

use dioxus::prelude::*;

use crate::components::CarCard;
use crate::routes::Route;
use crate::types::{CardDefaults, CarListing};

/// Props for CarSection
#[derive(Props, Clone, PartialEq)]
pub struct CarSectionProps {
    pub title: String,
    /// Optional "View All" destination. Sections without one render a bare
    /// title row.
    pub view_all: Option<Route>,
    pub listings: Vec<CarListing>,
    #[props(default)]
    pub defaults: CardDefaults,
}

/// A titled grid of listing cards with an optional "View All" affordance.
#[component]
pub fn CarSection(props: CarSectionProps) -> Element {
    rsx! {
        section {
            class: "w-full flex flex-col gap-4",
            div {
                class: "flex items-center justify-between mb-4",
                h2 { class: "text-gray-500 text-xl font-semibold", "{props.title}" }
                if let Some(route) = props.view_all.clone() {
                    Link {
                        to: route,
                        class: "text-blue-600 hover:underline",
                        "View All"
                    }
                }
            }
            CardGrid { listings: props.listings.clone(), defaults: props.defaults.clone() }
        }
    }
}

/// Responsive grid of cards, one per listing, in input order.
///
/// Position-index keys are safe here: the catalogs are static and never
/// reordered or filtered. A dynamic catalog would need a stable listing id.
#[component]
pub fn CardGrid(listings: Vec<CarListing>, #[props(default)] defaults: CardDefaults) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
            for (index, listing) in listings.iter().enumerate() {
                CarCard {
                    key: "{index}",
                    listing: listing.clone(),
                    defaults: defaults.clone(),
                }
            }
        }
    }
}
