//! Form State and Validation
//!
//! Input checks run before any request is sent. Each [`FormError`]
//! displays as the message the user sees.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::model::{
    Artwork, ArtworkPayload, ForgotPasswordRequest, LoginRequest, ProfileUpdate,
    RegisterRequest, UserProfile,
};

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 8;

/// Largest profile photo accepted, in bytes
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

/// Rejected form input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Email and password must be filled in")]
    LoginMissingFields,

    #[error("All fields must be filled in")]
    RegisterMissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Please enter your email address.")]
    MissingEmail,

    #[error("Please upload an image and fill in Title and Artist name.")]
    ArtworkIncomplete,

    #[error("Please ensure Image, Title, and Artist name are filled.")]
    ArtworkEditIncomplete,

    #[error("File size too large! Max 10MB.")]
    PhotoTooLarge,

    #[error("Please choose an image file.")]
    NotAnImage,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Loose shape check matching what a browser `type="email"` input accepts
pub fn looks_like_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

/// Login page fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        if blank(&self.email) || blank(&self.password) {
            return Err(FormError::LoginMissingFields);
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Registration page fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        if [&self.username, &self.email, &self.password, &self.confirm_password]
            .into_iter()
            .any(|f| blank(f))
        {
            return Err(FormError::RegisterMissingFields);
        }
        if !looks_like_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Forgot-password page field
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<ForgotPasswordRequest, FormError> {
        if blank(&self.email) {
            return Err(FormError::MissingEmail);
        }
        Ok(ForgotPasswordRequest {
            email: self.email.trim().to_string(),
        })
    }
}

/// Add/edit artwork fields; `image` is a data URL or the stored image URL
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtworkForm {
    pub image: String,
    pub title: String,
    pub artist: String,
    /// `YYYY-MM-DD`, as a date input produces
    pub year: String,
    pub category: String,
    pub description: String,
}

impl ArtworkForm {
    /// Prefill the edit page from a stored artwork
    pub fn from_artwork(artwork: &Artwork) -> Self {
        let year = artwork
            .year
            .as_deref()
            .map(|y| y.split('T').next().unwrap_or_default().to_string())
            .unwrap_or_default();

        Self {
            image: artwork.image.clone().unwrap_or_default(),
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            year,
            category: artwork.category.clone().unwrap_or_default(),
            description: artwork.description.clone().unwrap_or_default(),
        }
    }

    fn incomplete(&self) -> bool {
        blank(&self.image) || blank(&self.title) || blank(&self.artist)
    }

    /// Checks for a new upload
    pub fn validate_new(&self) -> Result<ArtworkPayload, FormError> {
        if self.incomplete() {
            return Err(FormError::ArtworkIncomplete);
        }
        Ok(self.to_payload())
    }

    /// Checks for an edit of an existing artwork
    pub fn validate_edit(&self) -> Result<ArtworkPayload, FormError> {
        if self.incomplete() {
            return Err(FormError::ArtworkEditIncomplete);
        }
        Ok(self.to_payload())
    }

    pub fn to_payload(&self) -> ArtworkPayload {
        ArtworkPayload {
            image: self.image.clone(),
            title: self.title.trim().to_string(),
            artist: self.artist.trim().to_string(),
            year: self.year.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// Edit-profile page fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Data URL of the photo; empty means no photo
    pub profile_pic: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name.clone().unwrap_or_default(),
            last_name: profile.last_name.clone().unwrap_or_default(),
            username: profile.username.clone(),
            email: profile.email.clone().unwrap_or_default(),
            profile_pic: profile.profile_pic.clone().unwrap_or_default(),
        }
    }

    pub fn set_photo(&mut self, data_url: String) {
        self.profile_pic = data_url;
    }

    pub fn clear_photo(&mut self) {
        self.profile_pic.clear();
    }

    pub fn has_photo(&self) -> bool {
        !self.profile_pic.is_empty()
    }

    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            profile_pic: self.profile_pic.clone(),
        }
    }
}

/// Reject profile photos over [`MAX_PHOTO_BYTES`]
pub fn check_photo_size(bytes: u64) -> Result<(), FormError> {
    if bytes > MAX_PHOTO_BYTES {
        Err(FormError::PhotoTooLarge)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, email: &str, password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm { email: " ".into(), password: "secret".into() };
        assert_eq!(form.validate().unwrap_err(), FormError::LoginMissingFields);

        let form = LoginForm { email: " user@gmail.com ".into(), password: "secret".into() };
        let req = form.validate().unwrap();
        assert_eq!(req.email, "user@gmail.com");
        assert_eq!(req.password, "secret");
    }

    #[test]
    fn test_register_checks_in_order() {
        assert_eq!(
            register("", "a@b.co", "x", "y").validate().unwrap_err(),
            FormError::RegisterMissingFields
        );
        assert_eq!(
            register("lorem", "not-an-email", "x", "y").validate().unwrap_err(),
            FormError::InvalidEmail
        );
        assert_eq!(
            register("lorem", "a@b.co", "short", "shorter").validate().unwrap_err(),
            FormError::PasswordMismatch
        );
        assert_eq!(
            register("lorem", "a@b.co", "short", "short").validate().unwrap_err(),
            FormError::PasswordTooShort
        );

        let req = register(" LoremKece25 ", "user@gmail.com", "12345678", "12345678")
            .validate()
            .unwrap();
        assert_eq!(req.username, "LoremKece25");
    }

    #[test]
    fn test_forgot_password() {
        let form = ForgotPasswordForm { email: "".into() };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Please enter your email address."
        );
        assert!(ForgotPasswordForm { email: "a@b.co".into() }.validate().is_ok());
    }

    #[test]
    fn test_artwork_requirements() {
        let mut form = ArtworkForm {
            title: "The Scream".into(),
            artist: "Edvard Munch".into(),
            ..Default::default()
        };
        assert_eq!(form.validate_new().unwrap_err(), FormError::ArtworkIncomplete);
        assert_eq!(form.validate_edit().unwrap_err(), FormError::ArtworkEditIncomplete);

        form.image = "data:image/png;base64,AAAA".into();
        form.category = " Painting ".into();
        let payload = form.validate_new().unwrap();
        assert_eq!(payload.category, "Painting");
        assert_eq!(payload.description, "");
    }

    #[test]
    fn test_artwork_prefill() {
        let artwork: Artwork = serde_json::from_value(serde_json::json!({
            "id": 5,
            "title": "Mona Lisa",
            "artist": "Leonardo Da Vinci",
            "year": "1503-06-01T00:00:00.000Z",
            "image": "https://cdn.example/mona.png",
        }))
        .unwrap();

        let form = ArtworkForm::from_artwork(&artwork);
        assert_eq!(form.year, "1503-06-01");
        assert_eq!(form.category, "");
        assert_eq!(form.description, "");
        assert!(form.validate_edit().is_ok());
    }

    #[test]
    fn test_profile_photo() {
        let profile = UserProfile {
            username: "lorem".into(),
            profile_pic: Some("data:image/png;base64,AAAA".into()),
            ..Default::default()
        };
        let mut form = ProfileForm::from_profile(&profile);
        assert!(form.has_photo());

        form.clear_photo();
        assert!(!form.has_photo());
        assert_eq!(form.to_update().profile_pic, "");

        assert!(check_photo_size(MAX_PHOTO_BYTES).is_ok());
        assert_eq!(
            check_photo_size(MAX_PHOTO_BYTES + 1).unwrap_err().to_string(),
            "File size too large! Max 10MB."
        );
    }
}
