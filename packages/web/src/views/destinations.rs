//! Destination browser: fetch once, then filter and sort the canonical set.

use dioxus::prelude::*;
use store::{apply_filters, apply_sort, seasons_of, tags_of, Destination, Filters, SortKey};
use ui::{use_client, DestinationCard, FilterBar, Toast};

#[component]
pub fn Destinations() -> Element {
    let client = use_client();
    let mut destinations = use_signal(Vec::<Destination>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut filters = use_signal(Filters::default);
    let mut auth_prompt = use_signal(|| false);

    let fetch_client = client.clone();
    let _loader = use_resource(move || {
        let client = fetch_client.clone();
        async move {
            match client.destinations().await {
                Ok(list) => {
                    destinations.set(list);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("failed to fetch destinations: {err}");
                    error.set(Some("Failed to load destinations".to_string()));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div { class: "page-loading", "Loading destinations..." }
        };
    }

    let all = destinations();
    // Derived view, recomputed from the canonical fetched set every render.
    let visible = apply_sort(apply_filters(&all, &filters()), SortKey::Name);
    let seasons = seasons_of(&all);
    let tags = tags_of(&all);

    rsx! {
        div {
            class: "list-page",

            header {
                class: "page-header",
                h1 { "Discover Amazing Destinations" }
                p { "Find your perfect adventure in Nepal with our curated collection of destinations" }
            }

            FilterBar {
                filters: filters(),
                seasons: seasons,
                tags: tags,
                on_change: move |next| filters.set(next),
                on_clear: move |_| filters.write().clear(),
            }

            if let Some(err) = error() {
                div { class: "page-error", "{err}" }
            } else {
                p {
                    class: "result-count",
                    "Showing {visible.len()} of {all.len()} destinations"
                }

                if visible.is_empty() {
                    div {
                        class: "empty-state",
                        h3 { "No destinations found" }
                        p { "Try adjusting your search criteria or filters" }
                    }
                } else {
                    div {
                        class: "card-grid",
                        for destination in visible {
                            DestinationCard {
                                key: "{destination.id}",
                                destination: destination.clone(),
                                on_auth_required: move |_| auth_prompt.set(true),
                            }
                        }
                    }
                }
            }

            if auth_prompt() {
                Toast {
                    message: "Please log in to add destinations to your wishlist",
                    on_close: move |_| auth_prompt.set(false),
                }
            }
        }
    }
}
