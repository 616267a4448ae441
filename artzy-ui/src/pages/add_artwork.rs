//! Add Artwork Page

use leptos::*;
use leptos_router::*;

use artzy::forms::ArtworkForm;
use artzy::{toast, Route};

use crate::api;
use crate::components::{ArtworkFields, Guarded, Nav};
use crate::state::GlobalState;

#[component]
pub fn AddArtwork() -> impl IntoView {
    view! {
        <Guarded route=Route::AddArtwork>
            <AddArtworkView />
        </Guarded>
    }
}

#[component]
fn AddArtworkView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let form = create_rw_signal(ArtworkForm::default());
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let payload = match form.with(ArtworkForm::validate_new) {
            Ok(payload) => payload,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };

        set_saving.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_artwork(&payload).await {
                Ok(()) => {
                    state.show_success(toast::ARTWORK_SAVED);
                    navigate(&Route::GalleryWalls.path(), Default::default());
                }
                Err(e) => state.report(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-[#F4EFEB] text-[#442D1D]">
            <Nav />

            <form on:submit=on_submit class="max-w-6xl mx-auto w-full px-6 py-10 flex flex-col gap-8">
                <h1 class="text-3xl md:text-4xl font-bold text-center">"Add Artwork"</h1>

                <ArtworkFields form=form />

                <div class="flex justify-center gap-6">
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="px-10 py-3 rounded-full text-white font-medium text-lg hover:scale-105 transition bg-[#442D1D] disabled:opacity-60"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Artwork" }}
                    </button>
                    <A
                        href="/gallery-walls"
                        class="px-10 py-3 rounded-full text-white font-medium text-lg hover:scale-105 transition bg-[#442D1D]"
                    >
                        "Cancel"
                    </A>
                </div>
            </form>
        </div>
    }
}
