//! Pages
//!
//! One component per route.

pub mod add_artwork;
pub mod artwork_detail;
pub mod beranda;
pub mod edit_artwork;
pub mod edit_profile;
pub mod forgot_password;
pub mod gallery_walls;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod public_profile;
pub mod register;

pub use add_artwork::AddArtwork;
pub use artwork_detail::ArtworkDetail;
pub use beranda::Beranda;
pub use edit_artwork::EditArtwork;
pub use edit_profile::EditProfile;
pub use forgot_password::ForgotPassword;
pub use gallery_walls::GalleryWalls;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use public_profile::PublicProfile;
pub use register::Register;
