//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_regular_icons::FaHeart as FaHeartOutline;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{use_client, use_session, SessionProvider, SessionState};

mod navbar;
pub use navbar::Navbar;

mod card;
pub use card::DestinationCard;

mod wishlist_button;
pub use wishlist_button::WishlistButton;

mod toast;
pub use toast::Toast;

mod filter_bar;
pub use filter_bar::FilterBar;

mod modal;
pub use modal::ModalOverlay;
