//! Personalized recommendations: bearer-authenticated fetch, filter/sort
//! pipeline with match-score ordering, and wishlist toasts with undo.

use api::WishlistToggle;
use dioxus::prelude::*;
use store::{apply_filters, apply_sort, seasons_of, Destination, Filters, Recommendation, SortKey};
use ui::{use_client, use_session, DestinationCard, FilterBar, Toast};

use crate::Route;

#[derive(Clone, PartialEq)]
struct ToastState {
    message: String,
    toggle: Option<WishlistToggle>,
}

fn display_card(rec: &Recommendation) -> Destination {
    Destination {
        id: rec.id,
        name: rec.name.clone(),
        place: rec.place.clone(),
        description: rec.description.clone(),
        average_cost: rec.average_cost,
        best_season: rec.best_season.clone(),
        tags: rec.tags.clone(),
        image_url: rec.image_url.clone(),
    }
}

#[component]
pub fn Recommendations() -> Element {
    let state = use_session();
    let client = use_client();
    let nav = use_navigator();

    let mut recommendations = use_signal(Vec::<Recommendation>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut filters = use_signal(Filters::default);
    let mut sort_key = use_signal(|| SortKey::MatchScore);
    let mut toast = use_signal(|| Option::<ToastState>::None);

    let fetch_client = client.clone();
    let mut loader = use_resource(move || {
        let client = fetch_client.clone();
        async move {
            let Some(user_id) = client.session().user_id() else {
                return;
            };
            match client.recommendations(&user_id).await {
                Ok(list) => {
                    recommendations.set(list);
                    error.set(None);
                }
                Err(err) if err.is_unauthorized() => {
                    // Stale token: drop the session and start over at login.
                    tracing::warn!("recommendations fetch unauthorized, clearing session");
                    client.session().clear_session();
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to fetch recommendations: {err}");
                    error.set(Some(
                        "Failed to load recommendations. Please try again later.".to_string(),
                    ));
                }
            }
            loading.set(false);
        }
    });

    if !state().is_logged_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    if loading() {
        return rsx! {
            div { class: "page-loading", "Loading recommendations..." }
        };
    }

    let all = recommendations();
    let visible = apply_sort(apply_filters(&all, &filters()), sort_key());
    let seasons = seasons_of(&all);

    let handle_wishlist_change = move |toggle: WishlistToggle| {
        let Some(rec) = recommendations().iter().find(|r| r.id == toggle.destination_id).cloned()
        else {
            return;
        };
        let message = match toggle.action {
            api::ToggleAction::Added => format!("{} added to wishlist", rec.name),
            api::ToggleAction::Removed => format!("{} removed from wishlist", rec.name),
        };
        toast.set(Some(ToastState {
            message,
            toggle: Some(toggle),
        }));
    };

    rsx! {
        div {
            class: "list-page",

            header {
                class: "page-header",
                h1 { "Your Personalized Recommendations" }
                p { "Destinations matched to your interests and preferences" }
            }

            div {
                class: "page-toolbar",
                button {
                    class: "btn secondary",
                    onclick: move |_| {
                        loading.set(true);
                        loader.restart();
                    },
                    "Refresh"
                }
            }

            FilterBar {
                filters: filters(),
                seasons: seasons,
                sort_key: Some(sort_key()),
                search_placeholder: Some("Search recommendations...".to_string()),
                on_change: move |next| filters.set(next),
                on_sort: move |key| sort_key.set(key),
                on_clear: move |_| {
                    filters.write().clear();
                    sort_key.set(SortKey::MatchScore);
                },
            }

            if let Some(err) = error() {
                div { class: "page-error", "{err}" }
            } else {
                p {
                    class: "result-count",
                    "Showing {visible.len()} of {all.len()} recommendations"
                }

                if visible.is_empty() {
                    div {
                        class: "empty-state",
                        h3 { "No recommendations found" }
                        p { "Try adjusting your search criteria or refresh for new recommendations" }
                    }
                } else {
                    div {
                        class: "card-grid",
                        for (index, rec) in visible.iter().enumerate() {
                            DestinationCard {
                                key: "{rec.id}",
                                destination: display_card(rec),
                                rank: Some(index + 1),
                                match_score: Some(rec.match_score),
                                on_wishlist_change: handle_wishlist_change,
                            }
                        }
                    }
                }
            }

            if let Some(current) = toast() {
                Toast {
                    message: current.message.clone(),
                    on_undo: Some(EventHandler::new({
                        let client = client.clone();
                        move |_| {
                            if let Some(toggle) = current.toggle {
                                let client = client.clone();
                                spawn(async move {
                                    if let Err(err) = client
                                        .toggle_wishlist(toggle.destination_id, toggle.undo_state())
                                        .await
                                    {
                                        tracing::error!("undo failed: {err}");
                                    }
                                });
                            }
                        }
                    })),
                    on_close: move |_| toast.set(None),
                }
            }
        }
    }
}
