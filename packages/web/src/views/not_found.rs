use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "empty-state",
            h1 { "404" }
            p { "The page /{path} doesn't exist." }
            Link { class: "btn primary", to: Route::Home {}, "Back home" }
        }
    }
}
