//! # localStorage-backed session store — browser persistence
//!
//! [`BrowserStore`] is the [`SessionStore`] implementation used on the web
//! platform. It is a zero-size struct that looks up `window.localStorage`
//! on every operation; the browser hands back the same storage object each
//! time, so there is nothing to cache on our side.
//!
//! All operations silently degrade: a missing window, a disabled storage
//! area or a quota failure turns reads into `None` and writes into logged
//! no-ops. The session simply reads as logged out.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::events::{AppEvent, EventBus};
use crate::session::{self, SessionStore};

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        Self
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage write failed for key {key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Re-broadcast the browser's native `storage` event as [`AppEvent::AuthChanged`]
/// when another tab touches a session key. Best effort only: delivery depends
/// on the browser, and concurrent writes stay last-write-wins.
///
/// The listener lives for the lifetime of the page.
pub fn wire_storage_events(bus: &EventBus) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let bus = bus.clone();
    let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
        move |event: web_sys::StorageEvent| {
            let is_session_key = match event.key() {
                Some(key) => key == session::TOKEN_KEY
                    || key == session::USER_ID_KEY
                    || key == session::USER_NAME_KEY
                    || key == session::ROLE_KEY
                    || key == session::EMAIL_KEY,
                // A null key means the other tab cleared storage wholesale.
                None => true,
            };
            if is_session_key {
                bus.emit(AppEvent::AuthChanged);
            }
        },
    );

    if window
        .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("failed to attach storage event listener");
    }
    closure.forget();
}
