pub mod events;
pub mod filter;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::{wire_storage_events, BrowserStore};

pub use events::{AppEvent, EventBus, Subscription};
pub use filter::{apply_filters, apply_sort, seasons_of, tags_of, Card, Filters, SortKey};
pub use models::{
    split_tags, AdminUser, Destination, Recommendation, Role, UserProfile, WishlistEntry,
};
pub use session::{Session, SessionManager, SessionStore};
