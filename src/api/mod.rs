//! REST API Surface
//!
//! Description of every backend call the gallery makes, shared by the
//! native client in [`client`] and the browser client in `artzy-ui`.

#[cfg(feature = "native")]
pub mod client;

#[cfg(feature = "native")]
pub use client::ArtzyClient;

use crate::error::ArtzyError;
use crate::model::{ApiErrorBody, ArtworkId};

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "https://artzybackend.vercel.app";

/// Normalize a base URL: trimmed, no trailing slash
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Whether a call sends the bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth {
    None,
    /// Sent when available; personalizes `is_liked`
    Optional,
    Required,
}

/// Backend endpoints
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    ForgotPassword,
    Me,
    UpdateProfile,
    MyArtworks,
    CreateArtwork,
    Artwork(ArtworkId),
    UpdateArtwork(ArtworkId),
    DeleteArtwork(ArtworkId),
    ToggleLike(ArtworkId),
    PublicArtwork(ArtworkId),
    UserArtworks(String),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Me
            | Endpoint::MyArtworks
            | Endpoint::Artwork(_)
            | Endpoint::PublicArtwork(_)
            | Endpoint::UserArtworks(_) => Method::Get,
            Endpoint::Login
            | Endpoint::Register
            | Endpoint::ForgotPassword
            | Endpoint::CreateArtwork
            | Endpoint::ToggleLike(_) => Method::Post,
            Endpoint::UpdateProfile | Endpoint::UpdateArtwork(_) => Method::Put,
            Endpoint::DeleteArtwork(_) => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/api/auth/login".to_string(),
            Endpoint::Register => "/api/auth/register".to_string(),
            Endpoint::ForgotPassword => "/api/auth/forgot-password".to_string(),
            Endpoint::Me => "/api/auth/me".to_string(),
            Endpoint::UpdateProfile => "/api/users/profile".to_string(),
            Endpoint::MyArtworks | Endpoint::CreateArtwork => "/api/artworks".to_string(),
            Endpoint::Artwork(id) | Endpoint::UpdateArtwork(id) | Endpoint::DeleteArtwork(id) => {
                format!("/api/artworks/{}", urlencoding::encode(id.as_str()))
            }
            Endpoint::ToggleLike(id) => {
                format!("/api/artworks/{}/like", urlencoding::encode(id.as_str()))
            }
            Endpoint::PublicArtwork(id) => {
                format!("/api/public/artworks/{}", urlencoding::encode(id.as_str()))
            }
            Endpoint::UserArtworks(username) => {
                format!("/api/artworks/user/{}", urlencoding::encode(username))
            }
        }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", normalize_base(base), self.path())
    }

    pub fn auth(&self) -> Auth {
        match self {
            Endpoint::Login | Endpoint::Register | Endpoint::ForgotPassword => Auth::None,
            Endpoint::PublicArtwork(_) | Endpoint::UserArtworks(_) => Auth::Optional,
            _ => Auth::Required,
        }
    }

    /// Message shown when the backend fails without saying why
    pub fn fallback_error(&self) -> &'static str {
        match self {
            Endpoint::Login => "Login failed",
            Endpoint::Register => "Failed to Register",
            Endpoint::ForgotPassword => "Failed to send reset link",
            Endpoint::CreateArtwork => "Failed to save artwork",
            Endpoint::UpdateArtwork(_) => "Failed to update artwork",
            Endpoint::DeleteArtwork(_) => "Failed to delete artwork!",
            Endpoint::Artwork(_) | Endpoint::PublicArtwork(_) => "Artwork not found!",
            Endpoint::UpdateProfile => "Failed to update profile",
            Endpoint::ToggleLike(_) => "Like failed",
            _ => "Request failed",
        }
    }

    /// Turn a failed response into an error
    pub fn error_for(&self, status: u16, body: &ApiErrorBody) -> ArtzyError {
        match (status, self) {
            (401, _) if self.auth() == Auth::Required => ArtzyError::Unauthorized,
            (404, Endpoint::UserArtworks(username)) => ArtzyError::UserNotFound(username.clone()),
            (404, Endpoint::Artwork(_) | Endpoint::PublicArtwork(_)) => {
                ArtzyError::NotFound(body.message_or(self.fallback_error()))
            }
            _ => ArtzyError::Api {
                status,
                message: body.message_or(self.fallback_error()),
            },
        }
    }
}

/// Parse an error body leniently; non-JSON bodies yield the fallback
pub fn parse_error_body(text: &str) -> ApiErrorBody {
    serde_json::from_str(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_methods() {
        let id = ArtworkId::new("17");
        assert_eq!(Endpoint::Login.path(), "/api/auth/login");
        assert_eq!(Endpoint::ToggleLike(id.clone()).path(), "/api/artworks/17/like");
        assert_eq!(Endpoint::PublicArtwork(id.clone()).path(), "/api/public/artworks/17");
        assert_eq!(
            Endpoint::UserArtworks("lorem kece".into()).path(),
            "/api/artworks/user/lorem%20kece"
        );
        assert_eq!(Endpoint::DeleteArtwork(id.clone()).method(), Method::Delete);
        assert_eq!(Endpoint::UpdateProfile.method(), Method::Put);
        assert_eq!(Endpoint::CreateArtwork.method().as_str(), "POST");
    }

    #[test]
    fn test_url_normalization() {
        assert_eq!(
            Endpoint::Me.url("https://artzybackend.vercel.app/ "),
            "https://artzybackend.vercel.app/api/auth/me"
        );
    }

    #[test]
    fn test_auth_modes() {
        assert_eq!(Endpoint::Login.auth(), Auth::None);
        assert_eq!(Endpoint::UserArtworks("a".into()).auth(), Auth::Optional);
        assert_eq!(Endpoint::MyArtworks.auth(), Auth::Required);
    }

    #[test]
    fn test_error_mapping() {
        let empty = ApiErrorBody::default();
        let body = parse_error_body(r#"{"error": "Invalid credentials"}"#);

        // A bad password is not a session problem
        assert_eq!(
            Endpoint::Login.error_for(401, &body).to_string(),
            "Invalid credentials"
        );
        assert!(matches!(
            Endpoint::MyArtworks.error_for(401, &empty),
            ArtzyError::Unauthorized
        ));
        assert!(matches!(
            Endpoint::UserArtworks("ghost".into()).error_for(404, &empty),
            ArtzyError::UserNotFound(u) if u == "ghost"
        ));
        assert_eq!(
            Endpoint::PublicArtwork(ArtworkId::new("1"))
                .error_for(404, &empty)
                .to_string(),
            "Artwork not found!"
        );
        assert_eq!(
            Endpoint::Register.error_for(500, &parse_error_body("<html>")).to_string(),
            "Failed to Register"
        );
    }
}
