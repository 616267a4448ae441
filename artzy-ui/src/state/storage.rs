//! Browser Token Store
//!
//! Keeps the login token in `localStorage["token"]`.

use artzy::session::TokenStore;
use artzy::{ArtzyError, ArtzyResult};

const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// [`TokenStore`] backed by the browser's local storage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) -> ArtzyResult<()> {
        let storage = local_storage()
            .ok_or_else(|| ArtzyError::Session("local storage unavailable".to_string()))?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|_| ArtzyError::Session("failed to store token".to_string()))
    }

    fn clear(&self) -> ArtzyResult<()> {
        if let Some(storage) = local_storage() {
            storage
                .remove_item(TOKEN_KEY)
                .map_err(|_| ArtzyError::Session("failed to remove token".to_string()))?;
        }
        Ok(())
    }
}
