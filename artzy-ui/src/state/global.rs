//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use async_trait::async_trait;

use artzy::gallery::{sync_like, ArtworkBoard, BoardCell, LikeSync};
use artzy::model::ArtworkId;
use artzy::session::{current_session, Session, TokenStore};
use artzy::toast::{Toast, ToastKind, ToastQueue};
use artzy::{access, Access, ArtzyError, ArtzyResult};

use super::storage::LocalStorageTokenStore;
use crate::api;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Session decoded from the stored token, `None` when logged out
    pub session: RwSignal<Option<Session>>,
    /// Toasts on screen
    pub toasts: RwSignal<ToastQueue>,
}

/// Board held in a signal, reachable from in-flight like requests
#[derive(Clone, Copy)]
pub struct SignalBoard(pub RwSignal<ArtworkBoard>);

impl BoardCell for SignalBoard {
    fn with_board<R>(&self, f: impl FnOnce(&mut ArtworkBoard) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Like requests through the REST API
pub struct ApiLikes;

#[async_trait(?Send)]
impl LikeSync for ApiLikes {
    async fn send_like(&self, id: &ArtworkId) -> ArtzyResult<()> {
        api::toggle_like(id).await
    }
}

fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(current_session(&LocalStorageTokenStore, now_secs())),
        toasts: create_rw_signal(ToastQueue::default()),
    };

    provide_context(state);
}

impl GlobalState {
    /// Re-read the stored token (drops it if expired)
    pub fn refresh_session(&self) {
        self.session
            .set(current_session(&LocalStorageTokenStore, now_secs()));
    }

    /// Store a fresh login token
    pub fn sign_in(&self, token: &str) -> ArtzyResult<()> {
        LocalStorageTokenStore.save(token)?;
        self.refresh_session();
        Ok(())
    }

    pub fn sign_out(&self) {
        if let Err(e) = LocalStorageTokenStore.clear() {
            web_sys::console::error_1(&format!("Failed to clear token: {}", e).into());
        }
        self.session.set(None);
    }

    /// Log out locally when the backend refused the token.
    ///
    /// The API client already cleared storage; re-reading it lets the
    /// route guards send the user to the login page.
    pub fn drop_rejected_session(&self, err: &ArtzyError) {
        if err.needs_login() {
            self.refresh_session();
        }
    }

    /// Toast a failed request
    pub fn report(&self, err: &ArtzyError) {
        self.drop_rejected_session(err);
        self.show_error(&err.to_string());
    }

    /// Show a success toast (auto-dismissed)
    pub fn show_success(&self, message: &str) {
        self.show(Toast::new(ToastKind::Success, message));
    }

    /// Show an error toast (auto-dismissed)
    pub fn show_error(&self, message: &str) {
        self.show(Toast::new(ToastKind::Error, message));
    }

    fn show(&self, toast: Toast) {
        let duration = toast.duration_ms;
        let mut id = String::new();
        self.toasts.update(|q| id = q.push(toast));

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(duration, move || {
            toasts.update(|q| {
                q.dismiss(&id);
            });
        })
        .forget();
    }

    pub fn dismiss_toast(&self, id: &str) {
        self.toasts.update(|q| {
            q.dismiss(id);
        });
    }

    /// Optimistically flip a like on `board` and confirm it with the backend.
    ///
    /// Returns `false` without touching the board when nobody is logged in.
    pub fn like(&self, board: RwSignal<ArtworkBoard>, id: ArtworkId) -> bool {
        if let Access::Redirect(_) = access::like_gate(self.session.get_untracked().as_ref()) {
            self.show_error(access::LIKE_LOGIN_MESSAGE);
            return false;
        }

        let state = *self;
        spawn_local(async move {
            if let Err(e) = sync_like(&SignalBoard(board), &ApiLikes, &id).await {
                web_sys::console::error_1(&format!("Like failed: {}", e).into());
                state.drop_rejected_session(&e);
            }
        });
        true
    }
}
