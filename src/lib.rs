//! # Artzy
//!
//! Personal digital art gallery. Users register, log in, upload artworks,
//! browse and filter a gallery, like artworks and keep a public profile.
//!
//! This crate holds everything the web app (`artzy-ui`) and the `artzy`
//! CLI share:
//!
//! - [`session`]: the bearer token as the session, decoded for ownership
//! - [`access`]: routes and which sessions may see them
//! - [`gallery`]: artwork lists, category filter, optimistic likes, carousel
//! - [`forms`]: input validation with user-facing messages
//! - [`api`]: the REST endpoints consumed (plus a `reqwest` client with the
//!   `native` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use artzy::api::ArtzyClient;
//! use artzy::forms::LoginForm;
//! use artzy::session::MemoryTokenStore;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ArtzyClient::new(
//!         artzy::api::DEFAULT_API_BASE,
//!         Duration::from_secs(30),
//!         MemoryTokenStore::new(),
//!     )?;
//!
//!     let form = LoginForm {
//!         email: "user@gmail.com".into(),
//!         password: "12345678".into(),
//!     };
//!     client.login(&form.validate()?).await?;
//!
//!     let mut board = artzy::gallery::ArtworkBoard::new(client.my_artworks().await?);
//!     board.select(artzy::gallery::Category::Painting);
//!     println!("{} paintings", board.visible().len());
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod api;
pub mod error;
pub mod format;
pub mod forms;
pub mod gallery;
pub mod media;
pub mod model;
pub mod session;
pub mod toast;

#[cfg(feature = "native")]
pub mod config;

// Re-export top-level types for convenience
pub use access::{check, is_owner, Access, Guard, Route};

pub use error::{ArtzyError, ArtzyResult};

pub use forms::{
    ArtworkForm, FormError, ForgotPasswordForm, LoginForm, ProfileForm, RegisterForm,
};

pub use gallery::{
    sync_like, ArtworkBoard, BoardCell, Carousel, Category, LikeSync, LikeTicket, Step, Toggle,
};

pub use model::{Artwork, ArtworkId, ArtworkPayload, ProfileUpdate, UserId, UserProfile};

pub use session::{current_session, forget_rejected, Claims, MemoryTokenStore, Session, TokenStore};

pub use toast::{Toast, ToastKind, ToastQueue};

#[cfg(feature = "native")]
pub use session::FileTokenStore;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
