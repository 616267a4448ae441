//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::ToastStack;
use crate::pages::{
    AddArtwork, ArtworkDetail, Beranda, EditArtwork, EditProfile, ForgotPassword, GalleryWalls,
    Home, Login, NotFound, Profile, PublicProfile, Register,
};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // A token can expire while the tab stays open
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let on_focus = window_event_listener(ev::focus, move |_| state.refresh_session());
    on_cleanup(move || on_focus.remove());

    view! {
        <Router>
            <div class="min-h-screen bg-[#F4EFEB] text-[#442D1D] font-montserrat">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/login" view=Login />
                    <Route path="/register" view=Register />
                    <Route path="/forgot-password" view=ForgotPassword />
                    <Route path="/beranda" view=Beranda />
                    <Route path="/gallery-walls" view=GalleryWalls />
                    <Route path="/artwork/:id" view=ArtworkDetail />
                    <Route path="/add-artwork" view=AddArtwork />
                    <Route path="/profile" view=Profile />
                    <Route path="/edit-profile" view=EditProfile />
                    <Route path="/edit-artwork/:id" view=EditArtwork />
                    <Route path="/user/:username" view=PublicProfile />
                    <Route path="/*any" view=NotFound />
                </Routes>

                <ToastStack />
            </div>
        </Router>
    }
}
