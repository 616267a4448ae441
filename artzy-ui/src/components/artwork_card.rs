//! Artwork Card
//!
//! One artwork in a gallery row: image, title, artist and like button.

use leptos::*;
use leptos_router::*;

use artzy::model::{Artwork, ArtworkId};
use artzy::Route;

#[component]
pub fn ArtworkCard(
    artwork: Artwork,
    #[prop(into)]
    on_like: Callback<ArtworkId>,
) -> impl IntoView {
    let href = Route::ArtworkDetail(artwork.id.clone()).path();
    let id = artwork.id.clone();
    let heart = if artwork.is_liked { "♥" } else { "♡" };
    let heart_class = if artwork.is_liked { "text-red-500" } else { "text-[#442D1D]" };

    view! {
        <A
            href=href
            class="flex-shrink-0 w-64 md:w-72 snap-start bg-white/80 rounded-2xl shadow-md overflow-hidden hover:scale-[1.02] transition"
        >
            <div class="h-64 md:h-72 bg-[#E8D1A7]/50">
                {artwork.image.clone().map(|src| view! {
                    <img src=src alt=artwork.title.clone() class="w-full h-full object-cover" />
                })}
            </div>
            <div class="p-4 flex items-start justify-between gap-2">
                <div class="min-w-0">
                    <h3 class="font-bold text-[#442D1D] truncate">{artwork.title.clone()}</h3>
                    <p class="text-sm text-[#442D1D]/70 truncate">{artwork.artist.clone()}</p>
                </div>
                <button
                    on:click=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_like.call(id.clone());
                    }
                    class="flex items-center gap-1 text-sm"
                >
                    <span class=format!("text-xl {}", heart_class)>{heart}</span>
                    <span class="text-[#442D1D]">{artwork.like_count}</span>
                </button>
            </div>
        </A>
    }
}
