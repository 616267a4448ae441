//! Data Model
//!
//! Artworks, user profiles and the request/response bodies exchanged with
//! the Artzy REST backend.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier as emitted by the backend: either a JSON string or a number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
        }
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Artwork identifier
    ArtworkId
);
string_id!(
    /// User identifier (the `id` claim of the session token)
    UserId
);

/// Like counters arrive as numbers or numeric strings
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<RawCount>::deserialize(deserializer)? {
        Some(RawCount::Int(n)) => n.max(0) as u64,
        Some(RawCount::Float(f)) if f > 0.0 => f as u64,
        Some(RawCount::Text(s)) => s.trim().parse::<i64>().map(|n| n.max(0) as u64).unwrap_or(0),
        _ => 0,
    })
}

/// An artwork as returned by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(alias = "_id")]
    pub id: ArtworkId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Data URL or remote URL of the image
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub like_count: u64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub artist_username: Option<String>,
    #[serde(default)]
    pub artist_profile_pic: Option<String>,
}

/// The signed-in user's profile (`/api/auth/me`)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
}

// ============ Request Types ============

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of artwork create and update calls
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtworkPayload {
    pub image: String,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub category: String,
    pub description: String,
}

/// Body of the profile update call; an empty `profile_pic` removes the photo
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub profile_pic: String,
}

// ============ Response Types ============

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body sent by the backend on failure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Backend message, or `fallback` when the body carried none
    pub fn message_or(&self, fallback: &str) -> String {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_accepts_numeric_ids_and_string_counts() {
        let art: Artwork = serde_json::from_str(
            r#"{"id": 12, "user_id": 3, "title": "Mona Lisa", "artist": "Da Vinci",
                "like_count": "4", "is_liked": true}"#,
        )
        .unwrap();

        assert_eq!(art.id, ArtworkId::new("12"));
        assert_eq!(art.user_id, Some(UserId::new("3")));
        assert_eq!(art.like_count, 4);
        assert!(art.is_liked);
        assert_eq!(art.category, None);
    }

    #[test]
    fn test_artwork_mongo_style_id() {
        let art: Artwork =
            serde_json::from_str(r#"{"_id": "65ab", "title": "The Scream", "artist": "Munch"}"#)
                .unwrap();
        assert_eq!(art.id.as_str(), "65ab");
        assert_eq!(art.like_count, 0);
        assert!(!art.is_liked);
    }

    #[test]
    fn test_like_count_null_and_garbage() {
        let art: Artwork =
            serde_json::from_str(r#"{"id": "1", "like_count": null}"#).unwrap();
        assert_eq!(art.like_count, 0);

        let art: Artwork =
            serde_json::from_str(r#"{"id": "1", "like_count": "lots"}"#).unwrap();
        assert_eq!(art.like_count, 0);
    }

    #[test]
    fn test_error_body_fallback() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error": "Wrong password"}"#).unwrap();
        assert_eq!(body.message_or("Login failed"), "Wrong password");

        let body: ApiErrorBody = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert_eq!(body.message_or("Login failed"), "Login failed");

        let body = ApiErrorBody { error: Some("  ".to_string()) };
        assert_eq!(body.message_or("Request failed"), "Request failed");
    }
}
