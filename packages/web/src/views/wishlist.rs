//! Saved destinations: list, per-entry remove, clear-all with confirmation.

use api::Membership;
use dioxus::prelude::*;
use store::{split_tags, AppEvent, WishlistEntry};
use ui::{use_client, use_session, ModalOverlay};

use crate::Route;

#[component]
pub fn Wishlist() -> Element {
    let state = use_session();
    let client = use_client();
    let nav = use_navigator();

    let mut entries = use_signal(Vec::<WishlistEntry>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_clear_confirm = use_signal(|| false);
    let mut clearing = use_signal(|| false);

    // Re-fetch whenever membership changes anywhere in the app.
    let revision = use_signal(|| 0u32);
    use_hook(|| {
        std::rc::Rc::new(client.session().subscribe(move |event| {
            if event == AppEvent::WishlistChanged {
                let mut revision = revision;
                revision += 1;
            }
        }))
    });

    let fetch_client = client.clone();
    let _loader = use_resource(move || {
        let client = fetch_client.clone();
        let _rev = revision();
        async move {
            let Some(user_id) = client.session().user_id() else {
                return;
            };
            match client.wishlist(&user_id).await {
                Ok(list) => {
                    entries.set(list);
                    error.set(None);
                }
                Err(err) if err.is_unauthorized() => {
                    client.session().clear_session();
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("failed to fetch wishlist: {err}");
                    error.set(Some("Failed to load wishlist".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let remove_client = client.clone();
    let handle_remove = EventHandler::new(move |destination_id: i64| {
        let client = remove_client.clone();
        spawn(async move {
            // The entry exists, so the membership going in is `In`.
            if let Err(err) = client.toggle_wishlist(destination_id, Membership::In).await {
                tracing::error!("failed to remove from wishlist: {err}");
                error.set(Some("Failed to remove from wishlist".to_string()));
            }
        });
    });

    let clear_client = client.clone();
    let handle_clear = move |_| {
        let client = clear_client.clone();
        spawn(async move {
            clearing.set(true);
            let Some(user_id) = client.session().user_id() else {
                clearing.set(false);
                return;
            };
            match client.clear_wishlist(&user_id).await {
                Ok(()) => {
                    show_clear_confirm.set(false);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("failed to clear wishlist: {err}");
                    error.set(Some("Failed to clear wishlist".to_string()));
                }
            }
            clearing.set(false);
        });
    };

    if !state().is_logged_in() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    if loading() {
        return rsx! {
            div { class: "page-loading", "Loading your wishlist..." }
        };
    }

    let list = entries();
    rsx! {
        div {
            class: "list-page",

            header {
                class: "page-header",
                h1 { "My Favorites" }
                p { "Your saved destinations and dream adventures" }
            }

            if let Some(err) = error() {
                div { class: "page-error", "{err}" }
            }

            if !list.is_empty() {
                div {
                    class: "page-toolbar",
                    button {
                        class: "btn danger",
                        disabled: clearing(),
                        onclick: move |_| show_clear_confirm.set(true),
                        if clearing() { "Clearing..." } else { "Clear All" }
                    }
                }
            }

            if list.is_empty() && error().is_none() {
                div {
                    class: "empty-state",
                    h3 { "Your wishlist is empty" }
                    p { "Browse destinations and tap the heart to save them here" }
                    Link { class: "btn primary", to: Route::Destinations {}, "Browse destinations" }
                }
            } else {
                div {
                    class: "wishlist-grid",
                    for entry in list {
                        WishlistCard {
                            key: "{entry.id}",
                            entry: entry.clone(),
                            on_remove: handle_remove,
                        }
                    }
                }
            }

            if show_clear_confirm() {
                ModalOverlay {
                    on_close: move |_| show_clear_confirm.set(false),
                    div {
                        class: "confirm-dialog",
                        h3 { "Clear wishlist?" }
                        p { "This removes every saved destination. This cannot be undone." }
                        div {
                            class: "form-actions",
                            button {
                                class: "btn danger",
                                disabled: clearing(),
                                onclick: handle_clear,
                                "Clear everything"
                            }
                            button {
                                class: "btn secondary",
                                onclick: move |_| show_clear_confirm.set(false),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn WishlistCard(entry: WishlistEntry, on_remove: EventHandler<i64>) -> Element {
    let tags = split_tags(&entry.destination_tags);
    let destination_id = entry.destination_id;

    rsx! {
        div {
            class: "wishlist-card",

            div {
                class: "card-image",
                if let Some(ref url) = entry.destination_image_url {
                    img { src: "{url}", alt: "{entry.destination_name}" }
                } else {
                    div { class: "card-image-placeholder" }
                }
            }

            div {
                class: "card-body",
                h3 { "{entry.destination_name}" }
                if !entry.destination_place.is_empty() {
                    p { class: "card-place", "{entry.destination_place}" }
                }
                p { class: "card-cost", "{entry.destination_cost} NPR" }
                if !entry.destination_season.is_empty() {
                    p { class: "card-season", "Best in {entry.destination_season}" }
                }
                if !tags.is_empty() {
                    div {
                        class: "card-tags",
                        for tag in tags.iter().take(3) {
                            span { key: "{tag}", class: "tag-chip", "{tag}" }
                        }
                    }
                }
                if !entry.added_at.is_empty() {
                    p { class: "card-added-at", "Saved {entry.added_at}" }
                }
                button {
                    class: "btn danger",
                    onclick: move |_| on_remove.call(destination_id),
                    "Remove"
                }
            }
        }
    }
}
