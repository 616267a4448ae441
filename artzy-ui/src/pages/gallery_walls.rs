//! Gallery Walls Page
//!
//! The signed-in user's own artworks, filterable by category and scrolled
//! one screen at a time.

use leptos::*;
use leptos_router::*;

use artzy::gallery::{ArtworkBoard, Category, Step};
use artzy::model::ArtworkId;
use artzy::Route;

use crate::api;
use crate::components::{ArtworkCarousel, CardSkeleton, CategoryFilter, Guarded, Nav};
use crate::state::GlobalState;

#[component]
pub fn GalleryWalls() -> impl IntoView {
    view! {
        <Guarded route=Route::GalleryWalls>
            <GalleryWallsView />
        </Guarded>
    }
}

#[component]
fn GalleryWallsView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let board = create_rw_signal(ArtworkBoard::default());
    let category = create_rw_signal(Category::All);
    let (loading, set_loading) = create_signal(true);

    spawn_local(async move {
        match api::my_artworks().await {
            Ok(artworks) => board.update(|b| b.replace(artworks)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch artworks: {}", e).into());
                state.drop_rejected_session(&e);
            }
        }
        set_loading.set(false);
    });

    create_effect(move |_| {
        let selected = category.get();
        board.update(|b| b.select(selected));
    });

    let on_like = Callback::new(move |id: ArtworkId| {
        state.like(board, id);
    });

    let empty = create_memo(move |_| board.with(|b| b.visible().is_empty()));

    view! {
        <div class="min-h-screen flex flex-col bg-[#F4EFEB]">
            <Nav />

            <main class="flex-grow w-full flex flex-col overflow-hidden bg-gradient-to-b from-[#F4EFEB] to-[#C5B49A]">
                <div class="relative mt-6 md:mt-10 px-4 max-w-7xl mx-auto w-full mb-6">
                    <h1 class="text-3xl md:text-4xl font-bold text-[#442D1D] text-center mb-4">
                        "Gallery Walls"
                    </h1>
                    <CategoryFilter selected=category />
                </div>

                {move || {
                    if loading.get() {
                        view! { <CardSkeleton /> }.into_view()
                    } else if empty.get() {
                        view! {
                            <div class="flex-grow flex flex-col items-center justify-center text-center px-4">
                                <p class="text-xl text-[#442D1D] opacity-80 mb-4">"No artworks found."</p>
                                <A href="/add-artwork" class="bg-[#442D1D] text-white py-2 px-6 rounded-full">
                                    "+ Add Artwork"
                                </A>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="flex-grow flex flex-col justify-center w-full pb-10">
                                <ArtworkCarousel board=board step=Step::Viewport on_like=on_like />
                            </div>
                        }
                        .into_view()
                    }
                }}
            </main>

            <A
                href="/add-artwork"
                class="fixed bottom-6 right-6 w-14 h-14 rounded-full bg-[#442D1D] text-white text-3xl shadow-lg flex items-center justify-center"
            >
                "+"
            </A>
        </div>
    }
}
