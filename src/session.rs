//! Session Management
//!
//! The bearer token handed out at login is the whole session: its presence
//! means "logged in", and its payload names the user for ownership checks.
//! Tokens are decoded but never verified here; the backend does that.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;
use std::sync::Mutex;

use crate::error::{ArtzyError, ArtzyResult};
use crate::model::UserId;

/// Claims read from the token payload
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub id: Option<UserId>,
    /// Expiry, seconds since the Unix epoch
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Decode the payload segment of a JWT
    pub fn decode(token: &str) -> ArtzyResult<Self> {
        let mut parts = token.split('.');
        let payload = match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(payload), Some(_)) => payload,
            _ => return Err(ArtzyError::Session("token is not a JWT".to_string())),
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| ArtzyError::Session(format!("invalid token payload: {}", e)))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| ArtzyError::Session(format!("invalid token claims: {}", e)))
    }
}

/// A logged-in session
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    token: String,
    claims: Option<Claims>,
}

impl Session {
    /// Build a session from a stored token.
    ///
    /// An undecodable token still counts as logged in; only ownership
    /// checks lose the user id.
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let claims = match Claims::decode(&token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!("Session token not decodable: {}", e);
                None
            }
        };
        Self { token, claims }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// Id of the signed-in user, when the token carries one
    pub fn user_id(&self) -> Option<&UserId> {
        self.claims.as_ref().and_then(|c| c.id.as_ref())
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Tokens without an `exp` claim never expire client-side
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.claims
            .as_ref()
            .and_then(|c| c.exp)
            .is_some_and(|exp| exp <= now_secs)
    }
}

/// Persistent home of the session token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> ArtzyResult<()>;
    fn clear(&self) -> ArtzyResult<()>;
}

/// Resolve the current session from a store.
///
/// Empty and expired tokens count as logged out; an expired token is
/// removed from the store.
pub fn current_session<S: TokenStore + ?Sized>(store: &S, now_secs: i64) -> Option<Session> {
    let token = store.load().filter(|t| !t.trim().is_empty())?;
    let session = Session::from_token(token.trim());

    if session.is_expired(now_secs) {
        tracing::info!("Session token expired, logging out");
        if let Err(e) = store.clear() {
            tracing::warn!("Failed to clear expired token: {}", e);
        }
        return None;
    }

    Some(session)
}

/// Drop the stored token after the backend refused it.
///
/// Returns whether `err` meant the session is gone.
pub fn forget_rejected<S: TokenStore + ?Sized>(store: &S, err: &ArtzyError) -> ArtzyResult<bool> {
    if !err.needs_login() {
        return Ok(false);
    }
    tracing::info!("Backend rejected the stored token, logging out");
    store.clear()?;
    Ok(true)
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn save(&self, token: &str) -> ArtzyResult<()> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| ArtzyError::Session("token store poisoned".to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> ArtzyResult<()> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| ArtzyError::Session("token store poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Token kept in a file on disk (CLI sessions)
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "native")]
impl FileTokenStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(feature = "native")]
impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .map(|t| t.trim().to_string())
    }

    fn save(&self, token: &str) -> ArtzyResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> ArtzyResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Unsigned JWT with the given JSON claims
    pub(crate) fn make_token(claims: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims);
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn test_decode_claims() {
        let token = make_token(r#"{"id": 7, "exp": 2000000000}"#);
        let session = Session::from_token(token.clone());

        assert_eq!(session.user_id(), Some(&UserId::new("7")));
        assert_eq!(session.bearer(), format!("Bearer {}", token));
        assert!(!session.is_expired(1_700_000_000));
        assert!(session.is_expired(2_000_000_000));
    }

    #[test]
    fn test_undecodable_token_is_still_a_session() {
        let session = Session::from_token("opaque-token");
        assert!(session.claims().is_none());
        assert!(session.user_id().is_none());
        assert!(!session.is_expired(i64::MAX));
    }

    #[test]
    fn test_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"id":"abcd"}"#);
        assert!(payload.ends_with('='));
        let token = format!("h.{}.s", payload);
        let claims = Claims::decode(&token).unwrap();
        assert_eq!(claims.id, Some(UserId::new("abcd")));
    }

    #[test]
    fn test_current_session_drops_expired_token() {
        let store = MemoryTokenStore::with_token(&make_token(r#"{"id": 1, "exp": 100}"#));
        assert!(current_session(&store, 200).is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_rejected_token_is_forgotten() {
        let store = MemoryTokenStore::with_token(&make_token(r#"{"id": 1}"#));

        let other = ArtzyError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!forget_rejected(&store, &other).unwrap());
        assert!(current_session(&store, 0).is_some());

        assert!(forget_rejected(&store, &ArtzyError::Unauthorized).unwrap());
        assert!(store.load().is_none());
        assert!(current_session(&store, 0).is_none());
    }

    #[test]
    fn test_current_session_ignores_blank_token() {
        let store = MemoryTokenStore::with_token("   ");
        assert!(current_session(&store, 0).is_none());

        let store = MemoryTokenStore::new();
        assert!(current_session(&store, 0).is_none());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("token"));

        assert!(store.load().is_none());
        store.save("abc.def.ghi").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert!(store.load().is_none());
        // Clearing twice is fine
        store.clear().unwrap();
    }
}
