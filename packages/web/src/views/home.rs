use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let state = use_session();

    rsx! {
        div {
            class: "hero",
            h1 { "Discover your next adventure" }
            p { "Personalized travel recommendations across Nepal: lakes, treks, heritage and more." }
            div {
                class: "hero-actions",
                Link { class: "btn primary", to: Route::Destinations {}, "Browse destinations" }
                if state().is_logged_in() {
                    Link { class: "btn secondary", to: Route::Recommendations {}, "Your recommendations" }
                } else {
                    Link { class: "btn secondary", to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
