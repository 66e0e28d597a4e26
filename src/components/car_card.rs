//! Car listing card component

use dioxus::prelude::*;

use crate::types::{dollars, CardDefaults, CarListing};

/// Attribute badges shown on every card. The listing record carries no spec
/// fields, so these are storefront-wide constants rather than per-car data.
const ATTRIBUTE_BADGES: [&str; 3] = [
    "\u{1F680} Auto",    // 🚀
    "\u{26FD} Petrol",   // ⛽
    "\u{1F4BA} 4 Seats", // 💺
];

/// Props for CarCard
#[derive(Props, Clone, PartialEq)]
pub struct CarCardProps {
    pub listing: CarListing,
    /// Defaults applied when the listing omits price or favorite state.
    #[props(default)]
    pub defaults: CardDefaults,
}

/// Card for a single listing: name with a favorite glyph, category subtitle,
/// vehicle image with the fixed attribute badges, daily rate and rent action.
#[component]
pub fn CarCard(props: CarCardProps) -> Element {
    let listing = &props.listing;

    let price = dollars(listing.resolved_price(&props.defaults));
    let favorite = listing.resolved_favorite(&props.defaults);

    rsx! {
        div {
            class: "w-full max-w-[304px] mx-auto h-full flex flex-col rounded-xl border border-gray-200 bg-white",

            // Header: name + favorite glyph, then the category subtitle
            div {
                class: "p-5 pb-0",
                h3 {
                    class: "w-full flex items-center justify-between text-lg font-semibold text-gray-900",
                    "{listing.name}"
                    HeartIcon { active: favorite }
                }
                p { class: "text-sm text-gray-500 mt-1", "{listing.category}" }
            }

            // Image + fixed attribute badges
            div {
                class: "flex-grow flex flex-col items-center justify-center gap-4 p-5",
                img {
                    src: "{listing.image_url}",
                    alt: "{listing.name} car",
                    width: "220",
                    height: "68",
                    class: "object-contain",
                }
                div {
                    class: "flex items-center space-x-2",
                    for badge in ATTRIBUTE_BADGES {
                        span { class: "text-sm text-gray-600", "{badge}" }
                    }
                }
            }

            // Footer: daily rate + rent action
            div {
                class: "w-full flex items-center justify-between p-5 pt-0",
                p {
                    "{price}"
                    "/"
                    span { class: "text-gray-500", "day" }
                }
                button {
                    class: "bg-blue-600 hover:bg-blue-700 transition-colors p-2 text-white rounded-md",
                    "Rent Now"
                }
            }
        }
    }
}

/// Favorite glyph. Visual state is strictly a function of `active`.
#[component]
pub fn HeartIcon(active: bool) -> Element {
    let class = if active {
        "w-5 h-5 text-red-500 fill-current"
    } else {
        "w-5 h-5 text-gray-300"
    };

    rsx! {
        svg {
            class: "{class}",
            fill: if active { "currentColor" } else { "none" },
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_card(listing: CarListing) -> String {
        dioxus_ssr::render_element(rsx! {
            CarCard { listing }
        })
    }

    #[test]
    fn favorite_sport_car_renders_title_subtitle_and_default_rate() {
        let html = render_card(CarListing::new("Koenigsegg", "Sport", "/car.png").favorite());

        assert!(html.contains("Koenigsegg"));
        assert!(html.contains("Sport"));
        assert!(html.contains("$99.00"));
        assert!(html.contains("text-red-500"));
    }

    #[test]
    fn heart_is_muted_unless_listing_is_a_favorite() {
        let html = render_card(CarListing::new("Nissan GT-R", "Sport", "/car (1).png"));

        assert!(html.contains("text-gray-300"));
        assert!(!html.contains("text-red-500"));
    }

    #[test]
    fn explicit_price_is_formatted_to_two_decimals() {
        let html = render_card(CarListing::new("CR-V", "SUV", "/suv.png").priced(12.5));

        assert!(html.contains("$12.50"));
        assert!(!html.contains("$99.00"));
    }

    #[test]
    fn every_card_shows_the_fixed_attribute_badges() {
        let html = render_card(CarListing::new("Rolls-Royce", "Sedan", "/car.png"));

        assert!(html.contains("Auto"));
        assert!(html.contains("Petrol"));
        assert!(html.contains("4 Seats"));
        assert!(html.contains("Rent Now"));
    }

    #[test]
    fn rendering_is_deterministic_for_identical_input() {
        let listing = CarListing::new("Porsche 911", "Sport", "/car (1).png").priced(42.0);

        let first = render_card(listing.clone());
        let second = render_card(listing);
        assert_eq!(first, second);
    }
}
