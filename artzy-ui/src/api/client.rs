//! HTTP API Client
//!
//! Functions for communicating with the Artzy REST API. Endpoint paths,
//! auth rules and error mapping come from [`artzy::api::Endpoint`].

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use artzy::api::{normalize_base, parse_error_body, Auth, Endpoint, Method, DEFAULT_API_BASE};
use artzy::model::{
    Artwork, ArtworkId, ArtworkPayload, ForgotPasswordRequest, LoginRequest, LoginResponse,
    ProfileUpdate, RegisterRequest, UserProfile,
};
use artzy::session::{current_session, forget_rejected};
use artzy::{ArtzyError, ArtzyResult};

use crate::state::LocalStorageTokenStore;

const API_URL_KEY: &str = "artzy_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

fn request(endpoint: &Endpoint) -> ArtzyResult<RequestBuilder> {
    let url = endpoint.url(&get_api_base());
    let builder = match endpoint.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };

    let session = current_session(&LocalStorageTokenStore, chrono::Utc::now().timestamp());
    match (endpoint.auth(), session) {
        (Auth::None, _) => Ok(builder),
        (_, Some(session)) => Ok(builder.header("Authorization", &session.bearer())),
        (Auth::Optional, None) => Ok(builder),
        (Auth::Required, None) => Err(ArtzyError::Unauthorized),
    }
}

async fn check(endpoint: &Endpoint, response: Response) -> ArtzyResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let err = endpoint.error_for(response.status(), &parse_error_body(&text));
    if let Err(e) = forget_rejected(&LocalStorageTokenStore, &err) {
        web_sys::console::error_1(&format!("Failed to clear token: {}", e).into());
    }
    Err(err)
}

async fn call(endpoint: Endpoint) -> ArtzyResult<Response> {
    let response = request(&endpoint)?
        .send()
        .await
        .map_err(|e| ArtzyError::Network(e.to_string()))?;
    check(&endpoint, response).await
}

async fn call_with<B: Serialize>(endpoint: Endpoint, body: &B) -> ArtzyResult<Response> {
    let response = request(&endpoint)?
        .json(body)
        .map_err(|e| ArtzyError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ArtzyError::Network(e.to_string()))?;
    check(&endpoint, response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> ArtzyResult<T> {
    response
        .json()
        .await
        .map_err(|e| ArtzyError::Decode(e.to_string()))
}

// ============ Auth ============

/// Log in and return the session token (the caller stores it)
pub async fn login(request: &LoginRequest) -> ArtzyResult<String> {
    let body: LoginResponse = decode(call_with(Endpoint::Login, request).await?).await?;
    Ok(body.token)
}

pub async fn register(request: &RegisterRequest) -> ArtzyResult<()> {
    call_with(Endpoint::Register, request).await?;
    Ok(())
}

pub async fn forgot_password(request: &ForgotPasswordRequest) -> ArtzyResult<()> {
    call_with(Endpoint::ForgotPassword, request).await?;
    Ok(())
}

pub async fn me() -> ArtzyResult<UserProfile> {
    decode(call(Endpoint::Me).await?).await
}

pub async fn update_profile(update: &ProfileUpdate) -> ArtzyResult<()> {
    call_with(Endpoint::UpdateProfile, update).await?;
    Ok(())
}

// ============ Artworks ============

pub async fn my_artworks() -> ArtzyResult<Vec<Artwork>> {
    decode(call(Endpoint::MyArtworks).await?).await
}

pub async fn create_artwork(payload: &ArtworkPayload) -> ArtzyResult<()> {
    call_with(Endpoint::CreateArtwork, payload).await?;
    Ok(())
}

/// Owner view of an artwork (used to prefill the edit form)
pub async fn artwork(id: &ArtworkId) -> ArtzyResult<Artwork> {
    decode(call(Endpoint::Artwork(id.clone())).await?).await
}

pub async fn public_artwork(id: &ArtworkId) -> ArtzyResult<Artwork> {
    decode(call(Endpoint::PublicArtwork(id.clone())).await?).await
}

pub async fn update_artwork(id: &ArtworkId, payload: &ArtworkPayload) -> ArtzyResult<()> {
    call_with(Endpoint::UpdateArtwork(id.clone()), payload).await?;
    Ok(())
}

pub async fn delete_artwork(id: &ArtworkId) -> ArtzyResult<()> {
    call(Endpoint::DeleteArtwork(id.clone())).await?;
    Ok(())
}

pub async fn toggle_like(id: &ArtworkId) -> ArtzyResult<()> {
    call(Endpoint::ToggleLike(id.clone())).await?;
    Ok(())
}

/// Public artworks of `username`; [`ArtzyError::UserNotFound`] on 404
pub async fn user_artworks(username: &str) -> ArtzyResult<Vec<Artwork>> {
    decode(call(Endpoint::UserArtworks(username.to_string())).await?).await
}
