//! UI Components
//!
//! Reusable Leptos components shared by the gallery pages.

pub mod artwork_card;
pub mod artwork_fields;
pub mod auth_layout;
pub mod carousel;
pub mod category_filter;
pub mod confirm_modal;
pub mod guard;
pub mod image_picker;
pub mod loading;
pub mod nav;
pub mod toast;

pub use artwork_card::ArtworkCard;
pub use artwork_fields::ArtworkFields;
pub use auth_layout::{AuthLayout, FormMessage, PasswordInput};
pub use carousel::ArtworkCarousel;
pub use category_filter::CategoryFilter;
pub use confirm_modal::ConfirmModal;
pub use guard::Guarded;
pub use image_picker::ImagePicker;
pub use loading::{CardSkeleton, Loading};
pub use nav::Nav;
pub use toast::ToastStack;
