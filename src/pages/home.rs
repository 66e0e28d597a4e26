//! Home page component

use dioxus::prelude::*;

use crate::catalog::{use_catalog, Catalog};
use crate::components::{CarSection, SiteFooter};
use crate::routes::Route;

/// Advertisement banners shown above the fold, keyed by position.
const AD_BANNERS: [&str; 2] = ["/Ads 1.png", "/Ads 2.png"];

/// Home page - the storefront landing layout
#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();

    let popular = catalog.listings(Catalog::Popular);
    let recommended = catalog.listings(Catalog::Recommended);

    rsx! {
        div {
            class: "bg-[#f6f7f9] min-h-screen p-4 sm:p-6 lg:p-20 flex flex-col gap-10",

            // Ads Section
            section {
                class: "w-full grid md:grid-cols-2 gap-4 sm:gap-8 justify-center items-center",
                for (index, ad) in AD_BANNERS.iter().enumerate() {
                    img {
                        key: "{index}",
                        src: "{ad}",
                        alt: "Advertisement {index + 1}",
                        width: "640",
                        height: "360",
                        class: "w-full rounded-lg shadow-md",
                    }
                }
            }

            // Pickup and Dropoff Section
            section {
                class: "w-full flex flex-wrap sm:flex-nowrap items-center justify-center sm:justify-between gap-4 sm:gap-8",
                img {
                    src: "/Pick - Up.png",
                    alt: "Pick-up Location",
                    width: "582",
                    height: "132",
                    class: "max-w-full",
                }
                img {
                    src: "/Switch.png",
                    alt: "Switch",
                    width: "60",
                    height: "60",
                    class: "max-w-full",
                }
                img {
                    src: "/Drop - Off.png",
                    alt: "Drop-off Location",
                    width: "582",
                    height: "132",
                    class: "max-w-full",
                }
            }

            CarSection {
                title: Catalog::Popular.title().to_string(),
                view_all: Route::Categories {},
                listings: popular,
                defaults: catalog.defaults.clone(),
            }

            // The design only links out from the popular section.
            CarSection {
                title: Catalog::Recommended.title().to_string(),
                listings: recommended,
                defaults: catalog.defaults.clone(),
            }

            // Show More Button
            section {
                class: "w-full text-center",
                Link {
                    to: Route::Categories {},
                    button {
                        class: "bg-blue-600 hover:bg-blue-700 transition-colors px-6 py-3 text-white rounded-md mt-5",
                        "Explore More Cars"
                    }
                }
            }

            SiteFooter {}
        }
    }
}
