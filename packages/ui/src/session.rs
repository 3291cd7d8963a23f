//! Session context and hooks for the UI.

use api::Client;
use dioxus::prelude::*;
use store::{AppEvent, Session, SessionManager};

/// Snapshot of the session for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub dark_mode: bool,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .map(|s| s.role == store::Role::Admin)
            .unwrap_or(false)
    }
}

/// Get the current session snapshot.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The shared API client (and through it, the session manager).
pub fn use_client() -> Client {
    use_context::<Client>()
}

fn make_manager() -> SessionManager {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let manager = SessionManager::new(
            std::rc::Rc::new(store::BrowserStore::new()),
            store::EventBus::new(),
        );
        store::wire_storage_events(manager.bus());
        manager
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionManager::in_memory()
    }
}

/// Flip the `dark` class on `<body>` to match the stored preference.
pub fn apply_dark_mode(on: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let result = if on {
                body.class_list().add_1("dark")
            } else {
                body.class_list().remove_1("dark")
            };
            if result.is_err() {
                tracing::warn!("failed to toggle dark mode class");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = on;
}

/// Provider component that owns the session manager and API client.
/// Wrap the app with this component; views reach both through context.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let client = use_hook(|| Client::new(make_manager()));

    let state = use_signal(|| SessionState {
        session: client.session().session(),
        dark_mode: client.session().dark_mode(),
    });

    // Re-derive the snapshot on every auth broadcast, including the
    // best-effort cross-tab storage events. The subscription guard lives in
    // the hook and drops with the provider.
    use_hook(|| {
        let manager = client.session().clone();
        let reader = manager.clone();
        std::rc::Rc::new(manager.subscribe(move |event| {
            if event == AppEvent::AuthChanged {
                let mut state = state;
                state.set(SessionState {
                    session: reader.session(),
                    dark_mode: reader.dark_mode(),
                });
            }
        }))
    });

    use_effect(move || apply_dark_mode(state().dark_mode));

    use_context_provider(|| client.clone());
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
