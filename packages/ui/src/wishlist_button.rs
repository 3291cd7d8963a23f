//! Heart button carrying the per-card wishlist membership cache.
//!
//! Each card answers "is this destination saved?" independently:
//! `Unknown` on mount, then `In`/`NotIn` after the status check. A toggle
//! disables the control until the backend answers (the only guard against
//! rapid double-activation) and flips the cached state only on success.
//! Every `WishlistChanged` broadcast triggers a re-check so cards mounted
//! in other views stay consistent.

use api::{ApiError, Membership, WishlistToggle};
use dioxus::prelude::*;
use store::AppEvent;

use crate::icons::{FaHeart, FaHeartOutline};
use crate::session::use_client;
use crate::Icon;

#[component]
pub fn WishlistButton(
    destination_id: i64,
    #[props(default)] class: String,
    #[props(default)] on_toggled: EventHandler<WishlistToggle>,
    #[props(default)] on_auth_required: EventHandler<()>,
) -> Element {
    let client = use_client();
    let mut membership = use_signal(|| Membership::Unknown);
    let mut busy = use_signal(|| false);

    // Bumped on every wishlist broadcast to re-run the status check. The
    // subscription guard lives in the hook and drops with the card.
    let revision = use_signal(|| 0u32);
    use_hook(|| {
        std::rc::Rc::new(client.session().subscribe(move |event| {
            if event == AppEvent::WishlistChanged {
                let mut revision = revision;
                revision += 1;
            }
        }))
    });

    let status_client = client.clone();
    let _status = use_resource(move || {
        let client = status_client.clone();
        let _rev = revision();
        async move {
            match client.wishlist_status(destination_id).await {
                Ok(state) => membership.set(state),
                Err(err) => {
                    tracing::error!("wishlist status check failed: {err}");
                    membership.set(Membership::NotIn);
                }
            }
        }
    });

    let on_click = move |_| {
        if busy() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            match client.toggle_wishlist(destination_id, membership()).await {
                Ok(toggle) => {
                    // The post-toggle membership doubles as the undo input.
                    membership.set(toggle.undo_state());
                    on_toggled.call(toggle);
                }
                Err(ApiError::AuthRequired) => {
                    on_auth_required.call(());
                }
                Err(err) => {
                    tracing::error!("wishlist toggle failed: {err}");
                }
            }
            busy.set(false);
        });
    };

    let saved = membership().is_in();
    rsx! {
        button {
            class: if saved { "wishlist-btn saved {class}" } else { "wishlist-btn {class}" },
            disabled: busy(),
            title: if saved { "Remove from wishlist" } else { "Add to wishlist" },
            onclick: on_click,
            if saved {
                Icon { icon: FaHeart, width: 18, height: 18 }
            } else {
                Icon { icon: FaHeartOutline, width: 18, height: 18 }
            }
        }
    }
}
