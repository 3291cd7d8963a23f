//! # API crate — typed REST client for the WanderWise backend
//!
//! Everything the frontends say to the backend goes through [`ApiClient`],
//! one typed method per endpoint. The crate owns:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The endpoint methods (auth, destinations, recommendations, wishlist, profile, admin) |
//! | [`config`] | Backend origin selection and URL assembly |
//! | [`error`] | The failure taxonomy ([`ApiError`]) |
//! | [`transport`] | The [`Transport`] seam: reqwest in production, a recording fake in tests |
//! | [`wishlist`] | Per-card membership states and toggle/undo results |
//!
//! Responses are decoded into the `store` models at this boundary; a shape
//! mismatch is a visible [`ApiError::Decode`], not a silently absent field.

pub mod config;
pub mod error;
pub mod transport;
pub mod wishlist;

mod client;

pub use client::{
    ApiClient, AuthResponse, Client, DestinationRequest, RegisterRequest, UpdateUserRequest,
};
pub use config::{join_url, ApiConfig};
pub use error::ApiError;
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};
pub use wishlist::{Membership, ToggleAction, WishlistToggle};

pub use store::{AdminUser, Destination, Recommendation, Role, UserProfile, WishlistEntry};
