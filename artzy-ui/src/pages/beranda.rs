//! Beranda Page
//!
//! Landing page once inside the app: greeting plus artist search.

use leptos::*;

use crate::api;
use crate::components::Nav;
use crate::state::GlobalState;

#[component]
pub fn Beranda() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (username, set_username) = create_signal("User".to_string());

    create_effect(move |_| {
        if state.session.get().is_none() {
            return;
        }
        spawn_local(async move {
            match api::me().await {
                Ok(profile) if !profile.username.is_empty() => set_username.set(profile.username),
                Ok(_) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch profile: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="h-screen overflow-hidden flex flex-col">
            <Nav search=true />

            <main class="flex-grow flex flex-col items-center justify-center text-center w-full beranda-bg px-4">
                <h1 class="text-3xl md:text-[70px] font-extrabold text-[#442D1D] mb-2 tracking-tight leading-tight">
                    {move || if state.session.get().is_some() {
                        format!("Welcome back, {} !", username.get())
                    } else {
                        "Welcome to Artzy!".to_string()
                    }}
                </h1>
                <p class="text-base md:text-3xl font-medium text-[#442D1D] mb-10 md:mb-12 opacity-90">
                    "All your creations, beautifully organized"
                </p>
            </main>
        </div>
    }
}
