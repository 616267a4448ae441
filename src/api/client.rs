//! Artzy REST Client
//!
//! HTTP client for the gallery backend, used by the CLI. The session token
//! lives in a [`TokenStore`]; login fills it, logout empties it.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::{parse_error_body, Auth, Endpoint, Method};
use crate::error::{ArtzyError, ArtzyResult};
use crate::gallery::LikeSync;
use crate::model::{
    Artwork, ArtworkId, ArtworkPayload, ForgotPasswordRequest, LoginRequest, LoginResponse,
    ProfileUpdate, RegisterRequest, UserProfile,
};
use crate::session::{current_session, forget_rejected, Session, TokenStore};

/// REST client bound to one backend and one token store
pub struct ArtzyClient<S: TokenStore> {
    client: Client,
    base_url: String,
    store: S,
}

impl<S: TokenStore> ArtzyClient<S> {
    /// Create a client with the given request timeout
    pub fn new(base_url: &str, timeout: Duration, store: S) -> ArtzyResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ArtzyError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: super::normalize_base(base_url),
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current session, if a valid token is stored
    pub fn session(&self) -> Option<Session> {
        current_session(&self.store, chrono::Utc::now().timestamp())
    }

    fn request(&self, endpoint: &Endpoint) -> ArtzyResult<RequestBuilder> {
        let url = endpoint.url(&self.base_url);
        let builder = match endpoint.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        let session = self.session();
        let builder = match (endpoint.auth(), session) {
            (Auth::None, _) => builder,
            (_, Some(session)) => builder.header(reqwest::header::AUTHORIZATION, session.bearer()),
            (Auth::Optional, None) => builder,
            (Auth::Required, None) => return Err(ArtzyError::Unauthorized),
        };

        Ok(builder)
    }

    async fn execute(&self, endpoint: &Endpoint, builder: RequestBuilder) -> ArtzyResult<Response> {
        tracing::debug!(method = endpoint.method().as_str(), path = %endpoint.path(), "API request");

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ArtzyError::Network("request timed out".to_string())
            } else {
                ArtzyError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let err = endpoint.error_for(status.as_u16(), &parse_error_body(&text));
        tracing::debug!(status = status.as_u16(), error = %err, "API request failed");

        forget_rejected(&self.store, &err)?;
        Err(err)
    }

    async fn call(&self, endpoint: Endpoint) -> ArtzyResult<Response> {
        let builder = self.request(&endpoint)?;
        self.execute(&endpoint, builder).await
    }

    async fn call_with<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> ArtzyResult<Response> {
        let builder = self.request(&endpoint)?.json(body);
        self.execute(&endpoint, builder).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ArtzyResult<T> {
        response
            .json()
            .await
            .map_err(|e| ArtzyError::Decode(e.to_string()))
    }

    // ============ Auth ============

    /// Log in and remember the token
    pub async fn login(&self, request: &LoginRequest) -> ArtzyResult<Session> {
        let response = self.call_with(Endpoint::Login, request).await?;
        let body: LoginResponse = Self::decode(response).await?;

        self.store.save(&body.token)?;
        tracing::info!("Logged in as {}", request.email);
        Ok(Session::from_token(body.token))
    }

    /// Forget the stored token
    pub fn logout(&self) -> ArtzyResult<()> {
        self.store.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    pub async fn register(&self, request: &RegisterRequest) -> ArtzyResult<()> {
        self.call_with(Endpoint::Register, request).await?;
        Ok(())
    }

    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> ArtzyResult<()> {
        self.call_with(Endpoint::ForgotPassword, request).await?;
        Ok(())
    }

    pub async fn me(&self) -> ArtzyResult<UserProfile> {
        let response = self.call(Endpoint::Me).await?;
        Self::decode(response).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ArtzyResult<()> {
        self.call_with(Endpoint::UpdateProfile, update).await?;
        Ok(())
    }

    // ============ Artworks ============

    /// The signed-in user's own artworks
    pub async fn my_artworks(&self) -> ArtzyResult<Vec<Artwork>> {
        let response = self.call(Endpoint::MyArtworks).await?;
        Self::decode(response).await
    }

    pub async fn create_artwork(&self, payload: &ArtworkPayload) -> ArtzyResult<()> {
        self.call_with(Endpoint::CreateArtwork, payload).await?;
        Ok(())
    }

    /// Owner view of an artwork (edit page)
    pub async fn artwork(&self, id: &ArtworkId) -> ArtzyResult<Artwork> {
        let response = self.call(Endpoint::Artwork(id.clone())).await?;
        Self::decode(response).await
    }

    /// Public view of an artwork (detail page)
    pub async fn public_artwork(&self, id: &ArtworkId) -> ArtzyResult<Artwork> {
        let response = self.call(Endpoint::PublicArtwork(id.clone())).await?;
        Self::decode(response).await
    }

    pub async fn update_artwork(&self, id: &ArtworkId, payload: &ArtworkPayload) -> ArtzyResult<()> {
        self.call_with(Endpoint::UpdateArtwork(id.clone()), payload)
            .await?;
        Ok(())
    }

    pub async fn delete_artwork(&self, id: &ArtworkId) -> ArtzyResult<()> {
        self.call(Endpoint::DeleteArtwork(id.clone())).await?;
        Ok(())
    }

    /// Flip the like state server-side
    pub async fn toggle_like(&self, id: &ArtworkId) -> ArtzyResult<()> {
        self.call(Endpoint::ToggleLike(id.clone())).await?;
        Ok(())
    }

    /// Artworks of a public profile
    pub async fn user_artworks(&self, username: &str) -> ArtzyResult<Vec<Artwork>> {
        let response = self
            .call(Endpoint::UserArtworks(username.to_string()))
            .await?;
        Self::decode(response).await
    }
}

#[async_trait(?Send)]
impl<S: TokenStore> LikeSync for ArtzyClient<S> {
    async fn send_like(&self, id: &ArtworkId) -> ArtzyResult<()> {
        self.toggle_like(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{sync_like, ArtworkBoard};
    use std::cell::RefCell;
    use crate::session::tests::make_token;
    use crate::session::MemoryTokenStore;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::{delete, get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    fn authorized(headers: &HeaderMap) -> bool {
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("Bearer ") && v != "Bearer revoked")
    }

    async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if body["password"] == "12345678" {
            let token = make_token(r#"{"id": 1}"#);
            (StatusCode::OK, Json(json!({ "token": token })))
        } else {
            (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid credentials" })))
        }
    }

    async fn me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
        if !authorized(&headers) {
            return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "No token" })));
        }
        (
            StatusCode::OK,
            Json(json!({ "id": 1, "username": "lorem", "join_date": "2025-10-01" })),
        )
    }

    async fn my_artworks(headers: HeaderMap) -> (StatusCode, Json<Value>) {
        if !authorized(&headers) {
            return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "No token" })));
        }
        (
            StatusCode::OK,
            Json(json!([
                { "id": 1, "user_id": 1, "title": "Mona Lisa", "artist": "Da Vinci",
                  "category": "Painting", "like_count": "2", "is_liked": false },
                { "id": 500, "user_id": 1, "title": "Broken", "artist": "Nobody",
                  "like_count": 0, "is_liked": false }
            ])),
        )
    }

    async fn like(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
        if id == "500" {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" })))
        } else {
            (StatusCode::OK, Json(json!({ "liked": true })))
        }
    }

    async fn user_artworks(headers: HeaderMap, Path(username): Path<String>) -> (StatusCode, Json<Value>) {
        if username == "ghost" {
            return (StatusCode::NOT_FOUND, Json(json!({ "error": "User not found" })));
        }
        let liked = authorized(&headers);
        (
            StatusCode::OK,
            Json(json!([{ "_id": "a1", "title": "Sketch", "artist": username, "is_liked": liked }])),
        )
    }

    async fn remove(Path(_id): Path<String>) -> StatusCode {
        StatusCode::NO_CONTENT
    }

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/me", get(me))
            .route("/api/artworks", get(my_artworks))
            .route("/api/artworks/:id", delete(remove))
            .route("/api/artworks/:id/like", post(like))
            .route("/api/artworks/user/:username", get(user_artworks));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/", addr)
    }

    async fn client() -> ArtzyClient<MemoryTokenStore> {
        let base = spawn_backend().await;
        ArtzyClient::new(&base, Duration::from_secs(5), MemoryTokenStore::new()).unwrap()
    }

    fn credentials(password: &str) -> LoginRequest {
        LoginRequest {
            email: "user@gmail.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let client = client().await;
        assert!(client.session().is_none());

        let session = client.login(&credentials("12345678")).await.unwrap();
        assert_eq!(session.user_id().map(|u| u.as_str()), Some("1"));
        assert!(client.session().is_some());

        let profile = client.me().await.unwrap();
        assert_eq!(profile.username, "lorem");

        client.logout().unwrap();
        assert!(client.session().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_message() {
        let client = client().await;
        let err = client.login(&credentials("wrong")).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(client.store().load().is_none());
    }

    #[tokio::test]
    async fn test_protected_call_without_session() {
        let client = client().await;
        let err = client.my_artworks().await.unwrap_err();
        assert!(err.needs_login());
    }

    #[tokio::test]
    async fn test_opaque_token_is_still_sent() {
        let base = spawn_backend().await;
        let store = MemoryTokenStore::with_token("opaque");
        let client = ArtzyClient::new(&base, Duration::from_secs(5), store).unwrap();

        // Undecodable tokens are still sent; only the backend can reject them
        assert!(client.me().await.is_ok());
        assert_eq!(client.my_artworks().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_public_profile_lookup() {
        let client = client().await;

        let err = client.user_artworks("ghost").await.unwrap_err();
        assert!(matches!(err, ArtzyError::UserNotFound(_)));

        let guest_view = client.user_artworks("vermeer").await.unwrap();
        assert_eq!(guest_view[0].id.as_str(), "a1");
        assert!(!guest_view[0].is_liked);

        client.login(&credentials("12345678")).await.unwrap();
        let member_view = client.user_artworks("vermeer").await.unwrap();
        assert!(member_view[0].is_liked);
    }

    #[tokio::test]
    async fn test_like_sync_against_backend() {
        let client = client().await;
        client.login(&credentials("12345678")).await.unwrap();

        let board = RefCell::new(ArtworkBoard::new(client.my_artworks().await.unwrap()));

        let liked = sync_like(&board, &client, &ArtworkId::new("1")).await.unwrap();
        assert!(liked);
        assert_eq!(board.borrow().get(&ArtworkId::new("1")).unwrap().like_count, 3);

        let err = sync_like(&board, &client, &ArtworkId::new("500"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "boom");
        let board = board.borrow();
        let broken = board.get(&ArtworkId::new("500")).unwrap();
        assert!(!broken.is_liked);
        assert_eq!(broken.like_count, 0);
        assert!(!board.is_pending(&ArtworkId::new("500")));
    }

    #[tokio::test]
    async fn test_rejected_token_is_cleared() {
        let base = spawn_backend().await;
        let store = MemoryTokenStore::with_token("revoked");
        let client = ArtzyClient::new(&base, Duration::from_secs(5), store).unwrap();
        assert!(client.session().is_some());

        let err = client.me().await.unwrap_err();
        assert!(err.needs_login());
        assert!(client.store().load().is_none());
        assert!(client.session().is_none());
    }

    #[tokio::test]
    async fn test_optional_auth_failure_keeps_token() {
        let base = spawn_backend().await;
        let store = MemoryTokenStore::with_token("opaque");
        let client = ArtzyClient::new(&base, Duration::from_secs(5), store).unwrap();

        let err = client.user_artworks("ghost").await.unwrap_err();
        assert!(matches!(err, ArtzyError::UserNotFound(_)));
        assert_eq!(client.store().load().as_deref(), Some("opaque"));
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let client = client().await;
        client.login(&credentials("12345678")).await.unwrap();
        client.delete_artwork(&ArtworkId::new("1")).await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let client = ArtzyClient::new(
            "http://127.0.0.1:9",
            Duration::from_millis(500),
            MemoryTokenStore::new(),
        )
        .unwrap();
        let err = client.user_artworks("anyone").await.unwrap_err();
        assert!(matches!(err, ArtzyError::Network(_)));
    }
}
