//! Artwork Detail Page
//!
//! Public view of one artwork. The owner gets edit and delete controls;
//! everyone else sees who posted it, linked to their public profile.

use leptos::*;
use leptos_router::*;

use artzy::model::{Artwork, ArtworkId};
use artzy::{access, format, toast, Route};

use crate::api;
use crate::components::{ConfirmModal, Loading, Nav};
use crate::state::GlobalState;

fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

#[component]
pub fn ArtworkDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();
    let navigate = store_value(use_navigate());

    let id = move || ArtworkId::new(params.with(|p| p.get("id").cloned().unwrap_or_default()));

    let (artwork, set_artwork) = create_signal(None::<Artwork>);
    let (error, set_error) = create_signal(None::<String>);
    let delete_open = create_rw_signal(false);

    create_effect(move |_| {
        let id = id();
        set_error.set(None);
        spawn_local(async move {
            match api::public_artwork(&id).await {
                Ok(art) => set_artwork.set(Some(art)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Unable to view artwork: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let id = id();
        spawn_local(async move {
            match api::delete_artwork(&id).await {
                Ok(()) => {
                    state.show_success(toast::ARTWORK_DELETED);
                    navigate.with_value(|nav| nav(&Route::GalleryWalls.path(), Default::default()));
                }
                Err(e) => state.report(&e),
            }
        });
    });

    view! {
        <div class="min-h-screen flex flex-col bg-[#F4EFEB] text-[#442D1D]">
            <Nav />

            <div class="px-6 pt-6">
                <button on:click=move |_| go_back() class="text-xl hover:opacity-75">"← Back"</button>
            </div>

            {move || match (artwork.get(), error.get()) {
                (_, Some(message)) => view! {
                    <p class="text-center text-xl mt-20">{message}</p>
                }.into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
                (Some(art), None) => {
                    let owner = access::is_owner(state.session.get().as_ref(), &art);
                    view! { <DetailBody artwork=art owner=owner delete_open=delete_open /> }.into_view()
                }
            }}

            <ConfirmModal open=delete_open on_confirm=confirm_delete />
        </div>
    }
}

#[component]
fn DetailBody(artwork: Artwork, owner: bool, delete_open: RwSignal<bool>) -> impl IntoView {
    let edit_href = Route::EditArtwork(artwork.id.clone()).path();
    let description = artwork
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description provided.".to_string());

    let footer = if owner {
        view! {
            <div class="flex gap-4 mt-6">
                <A href=edit_href class="flex-1 py-3 rounded-full bg-[#442D1D] text-white text-center font-semibold">
                    "Edit Artwork"
                </A>
                <button
                    on:click=move |_| delete_open.set(true)
                    class="flex-1 py-3 rounded-full bg-red-600 text-white font-semibold"
                >
                    "Delete Artwork"
                </button>
            </div>
        }
        .into_view()
    } else {
        let profile_href = artwork
            .artist_username
            .clone()
            .map(|u| Route::PublicProfile(u).path())
            .unwrap_or_else(|| "#".to_string());
        let avatar = match artwork.artist_profile_pic.clone() {
            Some(src) => view! { <img src=src alt="Artist" class="w-12 h-12 rounded-full object-cover" /> }.into_view(),
            None => view! {
                <div class="w-12 h-12 rounded-full bg-[#442D1D] text-white flex items-center justify-center font-bold">
                    {format::avatar_initial(artwork.artist_username.as_deref())}
                </div>
            }
            .into_view(),
        };

        view! {
            <A href=profile_href class="flex items-center gap-3 mt-6">
                {avatar}
                <div>
                    <p class="text-xs uppercase tracking-wider opacity-70">"Posted by"</p>
                    <p class="font-bold">{format::artist_label(&artwork)}</p>
                </div>
            </A>
        }
        .into_view()
    };

    view! {
        <div class="max-w-6xl mx-auto w-full px-6 py-8 grid md:grid-cols-2 gap-10">
            <div class="bg-[#E8D1A7] rounded-3xl p-6 flex items-center justify-center">
                {artwork.image.clone().map(|src| view! {
                    <img src=src alt=artwork.title.clone() class="max-h-[70vh] rounded-xl object-contain" />
                })}
            </div>

            <div>
                <h2 class="text-4xl font-extrabold mb-1">{artwork.title.clone()}</h2>
                <p class="text-lg mb-6">{format!("by {}", artwork.artist)}</p>

                <div class="grid grid-cols-2 gap-4 mb-6">
                    <div>
                        <span class="text-xs uppercase tracking-wider opacity-70">"Year Created"</span>
                        <p class="font-semibold">{format::long_date_en_gb(artwork.year.as_deref())}</p>
                    </div>
                    <div>
                        <span class="text-xs uppercase tracking-wider opacity-70">"Category"</span>
                        <p class="font-semibold">{format::or_dash(artwork.category.as_deref())}</p>
                    </div>
                </div>

                <span class="text-xs uppercase tracking-wider opacity-70">"Description"</span>
                <p class="leading-relaxed">{description}</p>

                {footer}
            </div>
        </div>
    }
}
