//! Transient notification with an optional Undo action.

use dioxus::prelude::*;

use crate::icons::{FaCheck, FaRotateLeft, FaXmark};
use crate::Icon;

/// Auto-dismisses after three seconds; Undo fires `on_undo` then closes.
#[component]
pub fn Toast(
    message: String,
    #[props(default)] on_undo: Option<EventHandler<()>>,
    on_close: EventHandler<()>,
) -> Element {
    #[cfg(target_arch = "wasm32")]
    use_hook(move || {
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
            on_close.call(());
        });
    });

    rsx! {
        div {
            class: "toast",
            div {
                class: "toast-message",
                Icon { icon: FaCheck, width: 16, height: 16 }
                span { "{message}" }
            }
            div {
                class: "toast-actions",
                if let Some(undo) = on_undo {
                    button {
                        class: "toast-undo",
                        title: "Undo",
                        onclick: move |_| {
                            undo.call(());
                            on_close.call(());
                        },
                        Icon { icon: FaRotateLeft, width: 14, height: 14 }
                    }
                }
                button {
                    class: "toast-close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }
        }
    }
}
