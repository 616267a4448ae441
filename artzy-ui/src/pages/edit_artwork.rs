//! Edit Artwork Page
//!
//! Loads the owner's artwork into the form; a failed load returns to the
//! gallery walls.

use leptos::*;
use leptos_router::*;

use artzy::forms::ArtworkForm;
use artzy::model::ArtworkId;
use artzy::{toast, Route};

use crate::api;
use crate::components::{ArtworkFields, Guarded, Loading, Nav};
use crate::state::GlobalState;

fn artwork_id() -> ArtworkId {
    ArtworkId::new(use_params_map().with_untracked(|p| p.get("id").cloned().unwrap_or_default()))
}

#[component]
pub fn EditArtwork() -> impl IntoView {
    view! {
        <Guarded route=Route::EditArtwork(artwork_id())>
            <EditArtworkView />
        </Guarded>
    }
}

#[component]
fn EditArtworkView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = store_value(use_navigate());
    let id = store_value(artwork_id());

    let form = create_rw_signal(ArtworkForm::default());
    let (loading, set_loading) = create_signal(true);
    let (saving, set_saving) = create_signal(false);

    spawn_local(async move {
        match api::artwork(&id.get_value()).await {
            Ok(art) => form.set(ArtworkForm::from_artwork(&art)),
            Err(e) => {
                state.drop_rejected_session(&e);
                state.show_error(&format!("Failed to load artwork data: {}", e));
                navigate.with_value(|nav| nav(&Route::GalleryWalls.path(), Default::default()));
            }
        }
        set_loading.set(false);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let payload = match form.with(ArtworkForm::validate_edit) {
            Ok(payload) => payload,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::update_artwork(&id.get_value(), &payload).await {
                Ok(()) => {
                    state.show_success(toast::ARTWORK_UPDATED);
                    navigate.with_value(|nav| nav(&Route::GalleryWalls.path(), Default::default()));
                }
                Err(e) => state.report(&e),
            }
            set_saving.set(false);
        });
    };

    let cancel_href = Route::ArtworkDetail(id.get_value()).path();

    view! {
        <div class="min-h-screen flex flex-col bg-[#F4EFEB] text-[#442D1D]">
            <Nav />

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <form on:submit=on_submit class="max-w-6xl mx-auto w-full px-6 py-10 flex flex-col gap-8">
                    <h1 class="text-3xl md:text-4xl font-bold text-center">"Edit Artwork"</h1>

                    <ArtworkFields form=form />

                    <div class="flex justify-center gap-6">
                        <button
                            type="submit"
                            disabled=move || saving.get()
                            class="px-10 py-3 rounded-full text-white font-medium text-lg hover:scale-105 transition bg-[#442D1D] disabled:opacity-60"
                        >
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                        <A
                            href=cancel_href.clone()
                            class="px-10 py-3 rounded-full text-white font-medium text-lg hover:scale-105 transition bg-[#442D1D]"
                        >
                            "Cancel"
                        </A>
                    </div>
                </form>
            </Show>
        </div>
    }
}
