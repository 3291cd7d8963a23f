//! Typed client for the WanderWise REST backend.
//!
//! One method per endpoint, each parsing the response into a concrete type
//! at the boundary. The client reads the bearer token from the shared
//! [`SessionManager`] on every call and never mutates it except on login,
//! where the returned identity is stored and `AuthChanged` broadcast.

use serde::{Deserialize, Serialize};
use serde_json::json;
use store::{
    AdminUser, AppEvent, Destination, Recommendation, Role, Session, SessionManager, UserProfile,
    WishlistEntry,
};

use crate::config::ApiConfig;
use crate::error::{error_from_response, ApiError};
use crate::transport::{ApiRequest, HttpTransport, RawResponse, Transport};
use crate::wishlist::{Membership, ToggleAction, WishlistToggle};

/// The client wired to the real network.
pub type Client = ApiClient<HttpTransport>;

/// Successful response from `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    pub name: String,
    pub role: Role,
}

/// Payload for `/api/auth/register`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub interests: String,
    pub budget: Option<f64>,
    pub preferred_season: String,
}

/// Partial update for `PUT /api/users/{userId}`. Unset fields are omitted
/// from the payload so the backend leaves them untouched.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_season: Option<String>,
}

/// Payload for creating or replacing a destination from the admin panel.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRequest {
    pub name: String,
    pub place: String,
    pub description: String,
    pub average_cost: f64,
    pub best_season: String,
    pub tags: String,
    pub image_url: String,
}

/// REST client over a pluggable [`Transport`].
#[derive(Clone)]
pub struct ApiClient<T: Transport> {
    config: ApiConfig,
    session: SessionManager,
    transport: T,
}

impl Client {
    /// Client against the configured backend, sharing `session`.
    pub fn new(session: SessionManager) -> Self {
        Self::with_transport(ApiConfig::from_env(), session, HttpTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ApiConfig, session: SessionManager, transport: T) -> Self {
        Self {
            config,
            session,
            transport,
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Send a request and hand back the raw 2xx response. Non-2xx becomes an
    /// [`ApiError`]; the raw status and body are logged here, once.
    async fn dispatch(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<RawResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.config.url(endpoint),
            token: self.session.token(),
            body,
        };
        let response = self.transport.execute(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            tracing::error!(
                status = response.status,
                body = %response.body,
                "request to {endpoint} failed"
            );
            Err(error_from_response(response.status, &response.body))
        }
    }

    /// Dispatch and decode the JSON body into `R`.
    async fn request<R: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let response = self.dispatch(method, endpoint, body).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    // --- auth ---

    /// Log in and store the returned session, broadcasting `AuthChanged`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = json!({ "email": email, "password": password });
        let auth: AuthResponse = self
            .request(reqwest::Method::POST, "/api/auth/login", Some(body))
            .await?;
        self.session.set_session(&Session {
            token: auth.token.clone(),
            user_id: auth.user_id.to_string(),
            user_name: auth.name.clone(),
            role: auth.role,
            email: email.to_string(),
        });
        Ok(auth)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.dispatch(
            reqwest::Method::POST,
            "/api/auth/register",
            Some(serde_json::to_value(request)?),
        )
        .await?;
        Ok(())
    }

    // --- destinations ---

    pub async fn destinations(&self) -> Result<Vec<Destination>, ApiError> {
        self.request(reqwest::Method::GET, "/api/destinations", None)
            .await
    }

    pub async fn destination(&self, id: i64) -> Result<Destination, ApiError> {
        self.request(reqwest::Method::GET, &format!("/api/destinations/{id}"), None)
            .await
    }

    pub async fn recommendations(&self, user_id: &str) -> Result<Vec<Recommendation>, ApiError> {
        self.request(
            reqwest::Method::GET,
            &format!("/api/recommendations/{user_id}"),
            None,
        )
        .await
    }

    // --- wishlist ---

    pub async fn wishlist(&self, user_id: &str) -> Result<Vec<WishlistEntry>, ApiError> {
        self.request(reqwest::Method::GET, &format!("/api/wishlist/{user_id}"), None)
            .await
    }

    /// Membership check for one destination. Without credentials this
    /// resolves to [`Membership::NotIn`] with no network call;
    /// unauthenticated users see "not saved", never an error.
    pub async fn wishlist_status(&self, destination_id: i64) -> Result<Membership, ApiError> {
        let Some(user_id) = self.credentials() else {
            return Ok(Membership::NotIn);
        };
        let in_wishlist: bool = self
            .request(
                reqwest::Method::GET,
                &format!("/api/wishlist/{user_id}/check/{destination_id}"),
                None,
            )
            .await?;
        Ok(if in_wishlist {
            Membership::In
        } else {
            Membership::NotIn
        })
    }

    /// Add or remove one destination based on the caller's cached state:
    /// POST when it is not in the wishlist, DELETE when it is. Broadcasts
    /// `WishlistChanged` exactly once after the backend confirms. Without
    /// credentials this is [`ApiError::AuthRequired`] and nothing is sent.
    ///
    /// The returned [`WishlistToggle`] carries [`WishlistToggle::undo_state`]
    /// for the inverse call.
    pub async fn toggle_wishlist(
        &self,
        destination_id: i64,
        current: Membership,
    ) -> Result<WishlistToggle, ApiError> {
        let Some(user_id) = self.credentials() else {
            return Err(ApiError::AuthRequired);
        };
        let (method, action) = if current.is_in() {
            (reqwest::Method::DELETE, ToggleAction::Removed)
        } else {
            (reqwest::Method::POST, ToggleAction::Added)
        };
        self.dispatch(
            method,
            &format!("/api/wishlist/{user_id}/{destination_id}"),
            None,
        )
        .await?;
        self.session.emit(AppEvent::WishlistChanged);
        Ok(WishlistToggle {
            destination_id,
            action,
        })
    }

    pub async fn clear_wishlist(&self, user_id: &str) -> Result<(), ApiError> {
        self.dispatch(
            reqwest::Method::DELETE,
            &format!("/api/wishlist/{user_id}/clear"),
            None,
        )
        .await?;
        self.session.emit(AppEvent::WishlistChanged);
        Ok(())
    }

    /// Token and user id together, or `None` when either is missing.
    fn credentials(&self) -> Option<String> {
        self.session.token()?;
        self.session.user_id()
    }

    // --- profile ---

    pub async fn user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        self.request(reqwest::Method::GET, &format!("/api/users/{user_id}"), None)
            .await
    }

    pub async fn update_user(
        &self,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<(), ApiError> {
        self.dispatch(
            reqwest::Method::PUT,
            &format!("/api/users/{user_id}"),
            Some(serde_json::to_value(request)?),
        )
        .await?;
        Ok(())
    }

    // --- admin ---

    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.request(reqwest::Method::GET, "/api/admin/users", None)
            .await
    }

    pub async fn admin_user(&self, id: i64) -> Result<AdminUser, ApiError> {
        self.request(reqwest::Method::GET, &format!("/api/admin/users/{id}"), None)
            .await
    }

    pub async fn admin_update_user(
        &self,
        id: i64,
        request: &UpdateUserRequest,
    ) -> Result<(), ApiError> {
        self.dispatch(
            reqwest::Method::PUT,
            &format!("/api/admin/users/{id}"),
            Some(serde_json::to_value(request)?),
        )
        .await?;
        Ok(())
    }

    pub async fn admin_set_role(&self, id: i64, role: Role) -> Result<(), ApiError> {
        self.dispatch(
            reqwest::Method::PUT,
            &format!("/api/admin/users/{id}/role?role={}", role.as_str()),
            None,
        )
        .await?;
        Ok(())
    }

    pub async fn admin_delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.dispatch(reqwest::Method::DELETE, &format!("/api/admin/users/{id}"), None)
            .await?;
        Ok(())
    }

    pub async fn admin_destinations(&self) -> Result<Vec<Destination>, ApiError> {
        self.request(reqwest::Method::GET, "/api/admin/destinations", None)
            .await
    }

    pub async fn admin_create_destination(
        &self,
        request: &DestinationRequest,
    ) -> Result<(), ApiError> {
        self.dispatch(
            reqwest::Method::POST,
            "/api/admin/destinations",
            Some(serde_json::to_value(request)?),
        )
        .await?;
        Ok(())
    }

    pub async fn admin_update_destination(
        &self,
        id: i64,
        request: &DestinationRequest,
    ) -> Result<(), ApiError> {
        self.dispatch(
            reqwest::Method::PUT,
            &format!("/api/admin/destinations/{id}"),
            Some(serde_json::to_value(request)?),
        )
        .await?;
        Ok(())
    }

    pub async fn admin_delete_destination(&self, id: i64) -> Result<(), ApiError> {
        self.dispatch(
            reqwest::Method::DELETE,
            &format!("/api/admin/destinations/{id}"),
            None,
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use store::EventBus;

    /// Transport that records every dispatched request and replays a queue
    /// of canned responses.
    #[derive(Clone, Default)]
    struct RecordingTransport {
        requests: Rc<RefCell<Vec<ApiRequest>>>,
        responses: Rc<RefCell<VecDeque<RawResponse>>>,
    }

    impl RecordingTransport {
        fn respond_with(&self, status: u16, body: &str) {
            self.responses.borrow_mut().push_back(RawResponse {
                status,
                body: body.to_string(),
            });
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        fn last_request(&self) -> ApiRequest {
            self.requests.borrow().last().cloned().expect("no requests")
        }
    }

    impl Transport for RecordingTransport {
        async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            Ok(self
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(RawResponse {
                    status: 200,
                    body: String::new(),
                }))
        }
    }

    fn test_client() -> (ApiClient<RecordingTransport>, RecordingTransport) {
        let transport = RecordingTransport::default();
        let client = ApiClient::with_transport(
            ApiConfig::new("http://backend.test"),
            SessionManager::in_memory(),
            transport.clone(),
        );
        (client, transport)
    }

    fn log_in(client: &ApiClient<RecordingTransport>) {
        client.session().set_session(&Session {
            token: "t1".to_string(),
            user_id: "42".to_string(),
            user_name: "Asha".to_string(),
            role: Role::User,
            email: "asha@example.com".to_string(),
        });
    }

    #[tokio::test]
    async fn test_login_stores_session_and_broadcasts() {
        let (client, transport) = test_client();
        transport.respond_with(
            200,
            r#"{"token":"jwt-1","userId":42,"name":"Asha","role":"USER"}"#,
        );

        let auth_events = Rc::new(Cell::new(0));
        let hits = auth_events.clone();
        let _sub = client.session().subscribe(move |evt| {
            if evt == AppEvent::AuthChanged {
                hits.set(hits.get() + 1);
            }
        });

        let auth = client.login("asha@example.com", "secret").await.unwrap();
        assert_eq!(auth.token, "jwt-1");
        assert!(client.session().is_logged_in());
        assert_eq!(client.session().user_id().as_deref(), Some("42"));
        assert_eq!(auth_events.get(), 1);

        let sent = transport.last_request();
        assert_eq!(sent.url, "http://backend.test/api/auth/login");
        assert_eq!(sent.token, None);
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_empty() {
        let (client, transport) = test_client();
        transport.respond_with(401, "Invalid email or password");

        let err = client.login("asha@example.com", "wrong").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!client.session().is_logged_in());
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_logged_in() {
        let (client, transport) = test_client();
        transport.respond_with(200, "[]");
        log_in(&client);

        client.recommendations("42").await.unwrap();
        let sent = transport.last_request();
        assert_eq!(sent.token.as_deref(), Some("t1"));
        assert_eq!(sent.url, "http://backend.test/api/recommendations/42");
    }

    #[tokio::test]
    async fn test_recommendations_401_maps_to_unauthorized() {
        let (client, transport) = test_client();
        log_in(&client);
        transport.respond_with(401, "");

        let err = client.recommendations("42").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_wishlist_status_without_token_skips_network() {
        let (client, transport) = test_client();

        let membership = client.wishlist_status(7).await.unwrap();
        assert_eq!(membership, Membership::NotIn);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_wishlist_status_parses_boolean_body() {
        let (client, transport) = test_client();
        log_in(&client);

        transport.respond_with(200, "true");
        assert_eq!(client.wishlist_status(7).await.unwrap(), Membership::In);

        transport.respond_with(200, "false");
        assert_eq!(client.wishlist_status(7).await.unwrap(), Membership::NotIn);
    }

    #[tokio::test]
    async fn test_toggle_without_credentials_is_auth_required() {
        let (client, transport) = test_client();

        let err = client.toggle_wishlist(7, Membership::NotIn).await.unwrap_err();
        assert!(matches!(err, ApiError::AuthRequired));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_adds_then_removes() {
        let (client, transport) = test_client();
        log_in(&client);

        let wishlist_events = Rc::new(Cell::new(0));
        let hits = wishlist_events.clone();
        let _sub = client.session().subscribe(move |evt| {
            if evt == AppEvent::WishlistChanged {
                hits.set(hits.get() + 1);
            }
        });

        transport.respond_with(200, "");
        let toggle = client.toggle_wishlist(7, Membership::NotIn).await.unwrap();
        assert_eq!(toggle.action, ToggleAction::Added);
        assert_eq!(toggle.undo_state(), Membership::In);
        assert_eq!(wishlist_events.get(), 1);
        let sent = transport.last_request();
        assert_eq!(sent.method, reqwest::Method::POST);
        assert_eq!(sent.url, "http://backend.test/api/wishlist/42/7");

        // Undo: toggle again from the post-toggle state.
        transport.respond_with(200, "");
        let undone = client.toggle_wishlist(7, toggle.undo_state()).await.unwrap();
        assert_eq!(undone.action, ToggleAction::Removed);
        assert_eq!(undone.undo_state(), Membership::NotIn);
        assert_eq!(wishlist_events.get(), 2);
        assert_eq!(transport.last_request().method, reqwest::Method::DELETE);
    }

    #[tokio::test]
    async fn test_failed_toggle_emits_nothing() {
        let (client, transport) = test_client();
        log_in(&client);

        let wishlist_events = Rc::new(Cell::new(0));
        let hits = wishlist_events.clone();
        let _sub = client.session().subscribe(move |evt| {
            if evt == AppEvent::WishlistChanged {
                hits.set(hits.get() + 1);
            }
        });

        transport.respond_with(409, r#"{"message":"Already in wishlist"}"#);
        let err = client.toggle_wishlist(7, Membership::NotIn).await.unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 409, .. }));
        assert_eq!(wishlist_events.get(), 0);
    }

    #[tokio::test]
    async fn test_admin_set_role_uses_query_parameter() {
        let (client, transport) = test_client();
        log_in(&client);
        transport.respond_with(200, "");

        client.admin_set_role(9, Role::Admin).await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "http://backend.test/api/admin/users/9/role?role=ADMIN"
        );
    }

    #[tokio::test]
    async fn test_update_user_omits_unset_fields() {
        let (client, transport) = test_client();
        log_in(&client);
        transport.respond_with(200, "");

        client
            .update_user(
                "42",
                &UpdateUserRequest {
                    interests: Some("trekking".to_string()),
                    ..UpdateUserRequest::default()
                },
            )
            .await
            .unwrap();

        let body = transport.last_request().body.unwrap();
        assert_eq!(body, serde_json::json!({ "interests": "trekking" }));
    }

    #[tokio::test]
    async fn test_decode_failure_on_shape_mismatch() {
        let (client, transport) = test_client();
        transport.respond_with(200, r#"{"unexpected":"shape"}"#);

        let err = client.destinations().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_event_bus_is_shared_with_session() {
        let bus = EventBus::new();
        let manager = SessionManager::new(Rc::new(store::MemoryStore::new()), bus.clone());
        let client = ApiClient::with_transport(
            ApiConfig::new("http://backend.test"),
            manager,
            RecordingTransport::default(),
        );

        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _sub = bus.subscribe(move |_| h.set(h.get() + 1));
        client.session().emit(AppEvent::WishlistChanged);
        assert_eq!(hits.get(), 1);
    }
}
