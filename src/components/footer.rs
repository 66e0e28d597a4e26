//! Site footer

use dioxus::prelude::*;

/// Opaque trailing footer block rendered at the bottom of every page.
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "bg-white border-t border-gray-100 mt-12 rounded-lg",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div {
                    class: "text-center",
                    h2 { class: "text-lg font-semibold text-blue-600 mb-2", "MORENT" }
                    p {
                        class: "text-gray-500 text-sm max-w-md mx-auto",
                        "Our vision is to provide convenience and help increase your sales business."
                    }
                    p {
                        class: "text-xs text-gray-400 mt-6",
                        "\u{00A9} 2026 MORENT. All rights reserved."
                    }
                }
            }
        }
    }
}
