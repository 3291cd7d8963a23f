//! # Session store and manager
//!
//! The client keeps its proof of authentication (the bearer token plus the
//! cached identity fields) in a small key-value [`SessionStore`]. On the web
//! that is the browser's localStorage ([`crate::BrowserStore`]); natively and
//! in tests it is [`crate::MemoryStore`].
//!
//! [`SessionManager`] is the one mutation point. It writes the session keys,
//! owns the [`EventBus`], and broadcasts [`AppEvent::AuthChanged`] after every
//! login/logout so mounted views re-derive their display state instead of
//! reading ambient globals.
//!
//! Invariant: presence of a non-empty `token` key is the sole authority for
//! "is logged in". Leftover identity keys without a token count as logged out.

use std::rc::Rc;

use crate::events::{AppEvent, EventBus, Subscription};
use crate::models::Role;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const USER_NAME_KEY: &str = "userName";
pub const ROLE_KEY: &str = "role";
pub const EMAIL_KEY: &str = "email";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Keys removed on logout. `darkMode` is a display preference, not session
/// identity, and survives.
const SESSION_KEYS: [&str; 5] = [TOKEN_KEY, USER_ID_KEY, USER_NAME_KEY, ROLE_KEY, EMAIL_KEY];

/// Persistent string key-value storage.
///
/// Reads of missing keys yield `None`. Writes that fail (storage quota,
/// unavailable backend) are logged by the implementation and swallowed: a
/// broken store degrades to "logged out", it never crashes a view.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The client-held session: token plus cached identity fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub user_name: String,
    pub role: Role,
    pub email: String,
}

/// Owns the session store and the event bus. Cloning shares both.
#[derive(Clone)]
pub struct SessionManager {
    store: Rc<dyn SessionStore>,
    bus: EventBus,
}

impl SessionManager {
    pub fn new(store: Rc<dyn SessionStore>, bus: EventBus) -> Self {
        Self { store, bus }
    }

    /// Manager over a fresh in-memory store, for native targets and tests.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(crate::MemoryStore::new()), EventBus::new())
    }

    /// Store every session field, then broadcast [`AppEvent::AuthChanged`].
    pub fn set_session(&self, session: &Session) {
        self.store.set(TOKEN_KEY, &session.token);
        self.store.set(USER_ID_KEY, &session.user_id);
        self.store.set(USER_NAME_KEY, &session.user_name);
        self.store.set(ROLE_KEY, session.role.as_str());
        self.store.set(EMAIL_KEY, &session.email);
        self.bus.emit(AppEvent::AuthChanged);
    }

    /// Remove every session key, then broadcast [`AppEvent::AuthChanged`].
    pub fn clear_session(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
        self.bus.emit(AppEvent::AuthChanged);
    }

    /// True iff a non-empty token is stored.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.store
            .get(ROLE_KEY)
            .map(|r| Role::parse(&r) == role)
            .unwrap_or(false)
    }

    /// The bearer token, if present and non-empty.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(USER_ID_KEY).filter(|v| !v.is_empty())
    }

    pub fn user_name(&self) -> String {
        self.store.get(USER_NAME_KEY).unwrap_or_default()
    }

    /// The full session, or `None` when no token is stored. Missing identity
    /// keys fall back to empty values rather than erroring.
    pub fn session(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            user_id: self.store.get(USER_ID_KEY).unwrap_or_default(),
            user_name: self.store.get(USER_NAME_KEY).unwrap_or_default(),
            role: Role::parse(&self.store.get(ROLE_KEY).unwrap_or_default()),
            email: self.store.get(EMAIL_KEY).unwrap_or_default(),
        })
    }

    /// Dark-mode preference; defaults to off. No broadcast; only the view
    /// that toggles it cares.
    pub fn dark_mode(&self) -> bool {
        self.store.get(DARK_MODE_KEY).as_deref() == Some("true")
    }

    pub fn set_dark_mode(&self, on: bool) {
        self.store.set(DARK_MODE_KEY, if on { "true" } else { "false" });
    }

    pub fn subscribe(&self, listener: impl Fn(AppEvent) + 'static) -> Subscription {
        self.bus.subscribe(listener)
    }

    pub fn emit(&self, event: AppEvent) {
        self.bus.emit(event);
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample_session() -> Session {
        Session {
            token: "t1".to_string(),
            user_id: "42".to_string(),
            user_name: "Asha".to_string(),
            role: Role::User,
            email: "asha@example.com".to_string(),
        }
    }

    #[test]
    fn test_set_session_then_logged_in() {
        let manager = SessionManager::in_memory();
        assert!(!manager.is_logged_in());

        manager.set_session(&sample_session());
        assert!(manager.is_logged_in());
        assert_eq!(manager.user_id().as_deref(), Some("42"));
        assert_eq!(manager.user_name(), "Asha");
        assert!(manager.has_role(Role::User));
        assert!(!manager.has_role(Role::Admin));
    }

    #[test]
    fn test_clear_session_removes_every_key() {
        let store = Rc::new(crate::MemoryStore::new());
        let manager = SessionManager::new(store.clone(), EventBus::new());

        manager.set_session(&sample_session());
        manager.clear_session();

        assert!(!manager.is_logged_in());
        for key in SESSION_KEYS {
            assert_eq!(store.get(key), None, "{key} should be gone");
        }
    }

    #[test]
    fn test_token_presence_is_sole_authority() {
        let store = Rc::new(crate::MemoryStore::new());
        let manager = SessionManager::new(store.clone(), EventBus::new());

        // Leftover identity keys without a token must read as logged out.
        store.set(USER_ID_KEY, "42");
        store.set(ROLE_KEY, "ADMIN");
        assert!(!manager.is_logged_in());
        assert!(manager.session().is_none());

        store.set(TOKEN_KEY, "");
        assert!(!manager.is_logged_in());
    }

    #[test]
    fn test_auth_changed_fires_once_per_mutation() {
        let manager = SessionManager::in_memory();
        let hits = Rc::new(Cell::new(0));

        let h = hits.clone();
        let _sub = manager.subscribe(move |evt| {
            assert_eq!(evt, AppEvent::AuthChanged);
            h.set(h.get() + 1);
        });

        manager.set_session(&sample_session());
        assert_eq!(hits.get(), 1);

        manager.clear_session();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_dark_mode_persists_without_broadcast() {
        let manager = SessionManager::in_memory();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _sub = manager.subscribe(move |_| h.set(h.get() + 1));

        assert!(!manager.dark_mode());
        manager.set_dark_mode(true);
        assert!(manager.dark_mode());
        assert_eq!(hits.get(), 0);

        // Logout keeps the preference.
        manager.clear_session();
        assert!(manager.dark_mode());
    }

    #[test]
    fn test_missing_keys_read_as_defaults() {
        let manager = SessionManager::in_memory();
        assert_eq!(manager.user_id(), None);
        assert_eq!(manager.user_name(), "");
        assert!(!manager.dark_mode());
        assert!(!manager.has_role(Role::User));
    }
}
