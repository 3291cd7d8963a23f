//! Search, filter and sort controls for the list views.
//!
//! The bar owns no list state. It renders the current [`Filters`] and emits
//! a full replacement on every change; the owning view recomputes its
//! derived list from the canonical fetched set.

use dioxus::prelude::*;
use store::{Filters, SortKey};

fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn price_value(bound: Option<f64>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn FilterBar(
    filters: Filters,
    seasons: Vec<String>,
    #[props(default)] tags: Vec<String>,
    #[props(default)] sort_key: Option<SortKey>,
    #[props(default)] search_placeholder: Option<String>,
    on_change: EventHandler<Filters>,
    #[props(default)] on_sort: EventHandler<SortKey>,
    on_clear: EventHandler<()>,
) -> Element {
    let placeholder = search_placeholder
        .unwrap_or_else(|| "Search destinations, places, or activities...".to_string());

    let search_filters = filters.clone();
    let season_filters = filters.clone();
    let min_filters = filters.clone();
    let max_filters = filters.clone();

    rsx! {
        div {
            class: "filter-bar",

            input {
                class: "filter-search",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{filters.search}",
                oninput: move |evt| {
                    let mut next = search_filters.clone();
                    next.search = evt.value();
                    on_change.call(next);
                },
            }

            div {
                class: "filter-controls",

                div {
                    class: "filter-field",
                    label { "Best Season" }
                    select {
                        value: "{filters.season}",
                        onchange: move |evt| {
                            let mut next = season_filters.clone();
                            next.season = evt.value();
                            on_change.call(next);
                        },
                        option { value: "", "All Seasons" }
                        for season in &seasons {
                            option { key: "{season}", value: "{season}", "{season}" }
                        }
                    }
                }

                div {
                    class: "filter-field",
                    label { "Price Range (NPR)" }
                    div {
                        class: "filter-price",
                        input {
                            r#type: "number",
                            placeholder: "Min",
                            value: price_value(filters.price_min),
                            oninput: move |evt| {
                                let mut next = min_filters.clone();
                                next.price_min = parse_price(&evt.value());
                                on_change.call(next);
                            },
                        }
                        input {
                            r#type: "number",
                            placeholder: "Max",
                            value: price_value(filters.price_max),
                            oninput: move |evt| {
                                let mut next = max_filters.clone();
                                next.price_max = parse_price(&evt.value());
                                on_change.call(next);
                            },
                        }
                    }
                }

                if let Some(current) = sort_key {
                    div {
                        class: "filter-field",
                        label { "Sort By" }
                        select {
                            value: "{current.as_str()}",
                            onchange: move |evt| on_sort.call(SortKey::parse(&evt.value())),
                            option { value: "matchScore", "Match Score" }
                            option { value: "price", "Price (Low to High)" }
                            option { value: "name", "Name (A-Z)" }
                        }
                    }
                }

                button {
                    class: "filter-clear",
                    onclick: move |_| on_clear.call(()),
                    "Clear Filters"
                }
            }

            if !tags.is_empty() {
                div {
                    class: "filter-tags",
                    label { "Activities & Interests" }
                    div {
                        class: "tag-chips",
                        for tag in tags.iter() {
                            {
                                let tag = tag.clone();
                                let selected = filters.tags.iter().any(|t| t == &tag);
                                let chip_filters = filters.clone();
                                rsx! {
                                    button {
                                        key: "{tag}",
                                        class: if selected { "tag-chip selected" } else { "tag-chip" },
                                        onclick: move |_| {
                                            let mut next = chip_filters.clone();
                                            next.toggle_tag(&tag);
                                            on_change.call(next);
                                        },
                                        "{tag}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
