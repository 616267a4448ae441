//! Public Profile Page
//!
//! Someone's public artworks at `/user/:username`. Liking asks guests to
//! log in first.

use leptos::*;
use leptos_router::*;

use artzy::gallery::{ArtworkBoard, Carousel, Category, Step};
use artzy::model::ArtworkId;
use artzy::{format, ArtzyError, Route};

use crate::api;
use crate::components::{ArtworkCarousel, CardSkeleton, CategoryFilter, Nav};
use crate::state::GlobalState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    UserNotFound,
}

#[component]
pub fn PublicProfile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();
    let navigate = store_value(use_navigate());

    // Decoded the same way the router's links encode it
    let username = move || {
        let raw = params.with(|p| p.get("username").cloned().unwrap_or_default());
        match Route::parse(&format!("/user/{}", raw)) {
            Route::PublicProfile(name) => name,
            _ => raw,
        }
    };

    let board = create_rw_signal(ArtworkBoard::default());
    let category = create_rw_signal(Category::All);
    let (load, set_load) = create_signal(LoadState::Loading);

    create_effect(move |_| {
        let name = username();
        set_load.set(LoadState::Loading);
        spawn_local(async move {
            match api::user_artworks(&name).await {
                Ok(artworks) => {
                    board.update(|b| b.replace(artworks));
                    set_load.set(LoadState::Ready);
                }
                Err(ArtzyError::UserNotFound(_)) => set_load.set(LoadState::UserNotFound),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch artworks: {}", e).into());
                    set_load.set(LoadState::Ready);
                }
            }
        });
    });

    create_effect(move |_| {
        let selected = category.get();
        board.update(|b| b.select(selected));
    });

    let empty = create_memo(move |_| board.with(|b| b.visible().is_empty()));

    let on_like = Callback::new(move |id: ArtworkId| {
        if !state.like(board, id) {
            navigate.with_value(|nav| nav(&Route::Login.path(), Default::default()));
        }
    });

    view! {
        <div class="min-h-screen flex flex-col bg-[#F4EFEB] text-[#442D1D]">
            <Nav search=true />

            {move || match load.get() {
                LoadState::Loading => view! { <CardSkeleton /> }.into_view(),
                LoadState::UserNotFound => view! {
                    <div class="flex-grow flex flex-col items-center justify-center text-center px-4">
                        <p class="text-3xl font-bold mb-2">"User not found"</p>
                        <p class="opacity-70 mb-6">{format!("No artist goes by @{}", username())}</p>
                        <A href="/beranda" class="bg-[#442D1D] text-white py-2 px-6 rounded-full">"Back to Home"</A>
                    </div>
                }.into_view(),
                LoadState::Ready => view! {
                    <main class="flex-grow w-full flex flex-col bg-gradient-to-b from-[#F4EFEB] to-[#C5B49A]">
                        <div class="relative mt-6 md:mt-10 px-4 max-w-7xl mx-auto w-full mb-6 flex flex-col items-center gap-4">
                            <div class="w-20 h-20 rounded-full bg-[#442D1D] text-white text-3xl flex items-center justify-center">
                                {format::avatar_initial(Some(&username()))}
                            </div>
                            <h1 class="text-3xl md:text-4xl font-bold">{format!("@{}", username())}</h1>
                            <p class="opacity-70">{move || format!("{} artworks", board.with(ArtworkBoard::len))}</p>
                            <CategoryFilter selected=category />
                        </div>

                        {move || if empty.get() {
                            view! {
                                <p class="text-center text-xl opacity-80 mt-10">"No artworks found."</p>
                            }.into_view()
                        } else {
                            view! {
                                <ArtworkCarousel
                                    board=board
                                    step=Step::Fixed(Carousel::PROFILE_STEP)
                                    on_like=on_like
                                />
                            }.into_view()
                        }}
                    </main>
                }.into_view(),
            }}
        </div>
    }
}
