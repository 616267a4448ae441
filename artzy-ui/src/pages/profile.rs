//! Profile Page
//!
//! The signed-in user's profile card, personal information, artwork count
//! and logout.

use leptos::*;
use leptos_router::*;

use artzy::model::UserProfile;
use artzy::{format, toast, ArtzyResult, Route};

use crate::api;
use crate::components::{Guarded, Loading, Nav};
use crate::state::GlobalState;

const LOAD_FAILED: &str = "Failed to load profile data.";

#[derive(Clone, Debug)]
enum ProfileLoad {
    Loading,
    Ready(UserProfile),
    Failed,
}

impl From<ArtzyResult<UserProfile>> for ProfileLoad {
    fn from(result: ArtzyResult<UserProfile>) -> Self {
        match result {
            Ok(me) => ProfileLoad::Ready(me),
            Err(_) => ProfileLoad::Failed,
        }
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    view! {
        <Guarded route=Route::Profile>
            <ProfileView />
        </Guarded>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = store_value(use_navigate());

    let (profile, set_profile) = create_signal(ProfileLoad::Loading);
    let (artwork_count, set_artwork_count) = create_signal(0usize);

    spawn_local(async move {
        let me = api::me().await;
        if let Err(e) = &me {
            web_sys::console::error_1(&format!("Error fetching profile: {}", e).into());
            state.drop_rejected_session(e);
        }
        let loaded = ProfileLoad::from(me);
        let failed = matches!(loaded, ProfileLoad::Failed);
        set_profile.set(loaded);
        if failed {
            return;
        }

        match api::my_artworks().await {
            Ok(artworks) => set_artwork_count.set(artworks.len()),
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching artworks: {}", e).into());
            }
        }
    });

    let logout = move |_| {
        state.sign_out();
        state.show_success(toast::LOGOUT_SUCCESS);
        navigate.with_value(|nav| nav(&Route::Login.path(), Default::default()));
    };

    view! {
        <div class="min-h-screen flex flex-col bg-[#F4EFEB] text-[#442D1D]">
            <Nav />

            {move || match profile.get() {
                ProfileLoad::Loading => view! { <Loading /> }.into_view(),
                ProfileLoad::Failed => view! {
                    <p class="text-center text-xl mt-20">{LOAD_FAILED}</p>
                }.into_view(),
                ProfileLoad::Ready(me) => view! {
                    <main class="max-w-4xl mx-auto w-full px-6 py-10 flex flex-col gap-8">
                        <h1 class="text-3xl md:text-4xl font-bold">"My Profile"</h1>

                        <section class="flex items-center justify-between bg-white/70 rounded-2xl p-6 shadow">
                            <div class="flex items-center gap-4">
                                {match me.profile_pic.clone().filter(|p| !p.is_empty()) {
                                    Some(src) => view! {
                                        <img src=src alt="Profile" class="w-20 h-20 rounded-full object-cover" />
                                    }.into_view(),
                                    None => view! {
                                        <div class="w-20 h-20 rounded-full bg-[#442D1D] text-white text-3xl flex items-center justify-center">
                                            {format::avatar_initial(Some(&me.username))}
                                        </div>
                                    }.into_view(),
                                }}
                                <div>
                                    <p class="text-xl font-bold">{format::full_name(&me)}</p>
                                    <p class="opacity-70">{format::display_handle(&me)}</p>
                                </div>
                            </div>
                            <A href="/edit-profile" class="px-6 py-2 rounded-full border border-[#442D1D] hover:bg-[#442D1D] hover:text-white transition">
                                "Edit"
                            </A>
                        </section>

                        <section class="bg-white/70 rounded-2xl p-6 shadow">
                            <h3 class="text-lg font-bold mb-4">"Personal Information"</h3>
                            <div class="grid md:grid-cols-2 gap-4">
                                <InfoRow label="First Name" value=format::or_dash(me.first_name.as_deref()) />
                                <InfoRow label="Last Name" value=format::or_dash(me.last_name.as_deref()) />
                                <InfoRow label="Email" value=format::or_dash(me.email.as_deref()) />
                                <InfoRow label="Artworks" value=artwork_count.get().to_string() />
                                <InfoRow label="Joined" value=format::month_year_id(me.join_date.as_deref()) />
                            </div>
                        </section>

                        <button
                            on:click=logout
                            class="self-start px-8 py-3 rounded-full bg-red-600 text-white font-semibold hover:bg-red-700 transition"
                        >
                            "Logout"
                        </button>
                    </main>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn InfoRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <span class="block text-xs uppercase tracking-wider opacity-70">{label}</span>
            <p class="font-semibold">{value}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artzy::ArtzyError;

    #[test]
    fn test_failed_fetch_leaves_loading() {
        let loaded = ProfileLoad::from(Err(ArtzyError::Unauthorized));
        assert!(matches!(loaded, ProfileLoad::Failed));

        let loaded = ProfileLoad::from(Err(ArtzyError::Network("offline".to_string())));
        assert!(matches!(loaded, ProfileLoad::Failed));

        let me = UserProfile {
            username: "lorem".to_string(),
            ..UserProfile::default()
        };
        assert!(matches!(ProfileLoad::from(Ok(me)), ProfileLoad::Ready(p) if p.username == "lorem"));
    }
}
