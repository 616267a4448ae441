//! Routing and Access Control
//!
//! Every page of the gallery maps to a [`Route`]. Pages consult
//! [`check`] before loading anything: some pages are only for signed-in
//! users, the login page is only for guests.

use crate::model::{Artwork, ArtworkId};
use crate::session::Session;

/// Message shown when a guest tries to like an artwork
pub const LIKE_LOGIN_MESSAGE: &str = "Please login to like artworks!";

/// Application routes
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    ForgotPassword,
    Beranda,
    GalleryWalls,
    ArtworkDetail(ArtworkId),
    AddArtwork,
    Profile,
    EditProfile,
    EditArtwork(ArtworkId),
    PublicProfile(String),
    NotFound,
}

impl Route {
    /// Parse a location path (query string and fragment ignored)
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["beranda"] => Route::Beranda,
            ["gallery-walls"] => Route::GalleryWalls,
            ["add-artwork"] => Route::AddArtwork,
            ["profile"] => Route::Profile,
            ["edit-profile"] => Route::EditProfile,
            ["artwork", id] => Route::ArtworkDetail(ArtworkId::from(*id)),
            ["edit-artwork", id] => Route::EditArtwork(ArtworkId::from(*id)),
            ["user", username] => {
                let username = urlencoding::decode(username)
                    .map(|u| u.into_owned())
                    .unwrap_or_else(|_| username.to_string());
                Route::PublicProfile(username)
            }
            _ => Route::NotFound,
        }
    }

    /// Location path of the route
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::Beranda => "/beranda".to_string(),
            Route::GalleryWalls => "/gallery-walls".to_string(),
            Route::ArtworkDetail(id) => format!("/artwork/{}", id),
            Route::AddArtwork => "/add-artwork".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::EditProfile => "/edit-profile".to_string(),
            Route::EditArtwork(id) => format!("/edit-artwork/{}", id),
            Route::PublicProfile(username) => format!("/user/{}", urlencoding::encode(username)),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn guard(&self) -> Guard {
        match self {
            Route::Login => Guard::GuestOnly,
            Route::GalleryWalls
            | Route::AddArtwork
            | Route::Profile
            | Route::EditProfile
            | Route::EditArtwork(_) => Guard::SignedIn,
            _ => Guard::Open,
        }
    }
}

/// Who may view a route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Open,
    /// Signed-in visitors are sent on to the beranda
    GuestOnly,
    /// Guests are sent to the login page
    SignedIn,
}

/// Outcome of an access check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Route),
}

/// Decide whether `route` may render for the current session
pub fn check(route: &Route, session: Option<&Session>) -> Access {
    match (route.guard(), session.is_some()) {
        (Guard::GuestOnly, true) => Access::Redirect(Route::Beranda),
        (Guard::SignedIn, false) => Access::Redirect(Route::Login),
        _ => Access::Allow,
    }
}

/// Owner controls (edit, delete) show only for the artwork's uploader
pub fn is_owner(session: Option<&Session>, artwork: &Artwork) -> bool {
    match (session.and_then(Session::user_id), artwork.user_id.as_ref()) {
        (Some(me), Some(owner)) => me == owner,
        _ => false,
    }
}

/// Liking requires a session
pub fn like_gate(session: Option<&Session>) -> Access {
    if session.is_some() {
        Access::Allow
    } else {
        Access::Redirect(Route::Login)
    }
}

/// Destination of the "Add Artwork" navigation link
pub fn add_artwork_target(session: Option<&Session>) -> Route {
    if session.is_some() {
        Route::AddArtwork
    } else {
        Route::Login
    }
}

/// Back link of the forgot-password page
pub fn forgot_password_back(from: Option<Route>, session: Option<&Session>) -> Route {
    match from {
        Some(route) => route,
        None if session.is_some() => Route::Beranda,
        None => Route::Home,
    }
}

/// Public profile search from the beranda search box
pub fn search_target(query: &str) -> Option<Route> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(Route::PublicProfile(query.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use crate::session::tests::make_token;

    fn session_for(id: &str) -> Session {
        Session::from_token(make_token(&format!(r#"{{"id": "{}"}}"#, id)))
    }

    fn artwork_by(owner: Option<&str>) -> Artwork {
        serde_json::from_value(serde_json::json!({
            "id": "42",
            "user_id": owner,
            "title": "Girl with a Pearl Earring",
            "artist": "Johannes Vermeer",
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_and_path_agree() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Register,
            Route::ForgotPassword,
            Route::Beranda,
            Route::GalleryWalls,
            Route::ArtworkDetail(ArtworkId::new("9")),
            Route::AddArtwork,
            Route::Profile,
            Route::EditProfile,
            Route::EditArtwork(ArtworkId::new("9")),
            Route::PublicProfile("lorem kece".to_string()),
        ];

        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_parse_edge_cases() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login/"), Route::Login);
        assert_eq!(Route::parse("/profile?tab=1"), Route::Profile);
        assert_eq!(Route::parse("/artwork"), Route::NotFound);
        assert_eq!(Route::parse("/nope"), Route::NotFound);
    }

    #[test]
    fn test_guest_redirects() {
        assert_eq!(check(&Route::GalleryWalls, None), Access::Redirect(Route::Login));
        assert_eq!(
            check(&Route::EditArtwork(ArtworkId::new("1")), None),
            Access::Redirect(Route::Login)
        );
        assert_eq!(check(&Route::Login, None), Access::Allow);
        assert_eq!(check(&Route::Beranda, None), Access::Allow);
        assert_eq!(check(&Route::PublicProfile("a".into()), None), Access::Allow);
        assert_eq!(check(&Route::ArtworkDetail(ArtworkId::new("1")), None), Access::Allow);
    }

    #[test]
    fn test_signed_in_redirects() {
        let session = Session::from_token("opaque");
        assert_eq!(check(&Route::Login, Some(&session)), Access::Redirect(Route::Beranda));
        assert_eq!(check(&Route::Profile, Some(&session)), Access::Allow);
        assert_eq!(check(&Route::Register, Some(&session)), Access::Allow);
    }

    #[test]
    fn test_ownership() {
        let me = session_for("3");
        assert!(is_owner(Some(&me), &artwork_by(Some("3"))));
        assert!(!is_owner(Some(&me), &artwork_by(Some("4"))));
        assert!(!is_owner(Some(&me), &artwork_by(None)));
        assert!(!is_owner(None, &artwork_by(Some("3"))));

        // A token without an id never owns anything
        let opaque = Session::from_token("opaque");
        assert!(!is_owner(Some(&opaque), &artwork_by(Some("3"))));
        assert_eq!(me.user_id(), Some(&UserId::new("3")));
    }

    #[test]
    fn test_navigation_helpers() {
        let session = Session::from_token("opaque");

        assert_eq!(like_gate(None), Access::Redirect(Route::Login));
        assert_eq!(like_gate(Some(&session)), Access::Allow);

        assert_eq!(add_artwork_target(None), Route::Login);
        assert_eq!(add_artwork_target(Some(&session)), Route::AddArtwork);

        assert_eq!(forgot_password_back(None, None), Route::Home);
        assert_eq!(forgot_password_back(None, Some(&session)), Route::Beranda);
        assert_eq!(
            forgot_password_back(Some(Route::Login), Some(&session)),
            Route::Login
        );

        assert_eq!(search_target("  "), None);
        assert_eq!(
            search_target(" vermeer "),
            Some(Route::PublicProfile("vermeer".to_string()))
        );
    }
}
