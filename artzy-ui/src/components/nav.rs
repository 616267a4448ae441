//! Navigation Component
//!
//! Header bar with the Artzy brand, artist search and links. On small
//! screens the links fold into a toggled menu.

use leptos::*;
use leptos_router::*;

use artzy::access;
use artzy::gallery::Toggle;
use artzy::Route;

use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav(
    /// Show the artist search box
    #[prop(optional)]
    search: bool,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let menu = create_rw_signal(Toggle::default());
    let (query, set_query) = create_signal(String::new());
    let navigate = use_navigate();

    let on_search = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        if let Some(target) = access::search_target(&query.get_untracked()) {
            menu.update(Toggle::close);
            navigate(&target.path(), Default::default());
        }
    };

    let signed_in = move || state.session.get().is_some();
    let add_href = move || access::add_artwork_target(state.session.get().as_ref()).path();

    view! {
        <header class="sticky top-0 z-50 bg-[#F4EFEB] shadow-md w-full border-b border-gray-300">
            <div class="max-w-full mx-auto flex justify-between items-center px-4 md:px-6 py-3 md:py-5">
                <A href="/beranda" class="text-3xl md:text-4xl font-extrabold text-[#442D1D] flex-shrink-0">
                    "Artzy"
                </A>

                {search.then(|| view! {
                    <div class="flex-grow flex items-center mx-5 max-w-sm md:max-w-xl">
                        <input
                            type="text"
                            placeholder="Search artist..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                            on:keydown=on_search
                            class="w-full py-1 px-4 bg-transparent border border-[#442D1D]/30 rounded-full
                                   focus:outline-none focus:border-[#442D1D] text-[#442D1D] placeholder-[#442D1D]/50"
                        />
                    </div>
                })}

                <nav class="hidden md:flex items-center font-medium text-[#442D1D] text-lg gap-6">
                    <NavLink href="/beranda" label="Home" />
                    <NavLink href="/gallery-walls" label="Gallery Walls" />
                    <A href=add_href class="hover:text-amber-700 transition duration-150">"Add Artwork"</A>
                    {move || if signed_in() {
                        view! {
                            <A href="/profile" class="font-semibold py-1.5 px-6 border border-gray-500 rounded-3xl hover:bg-[#442D1D] hover:text-white transition duration-200">
                                "Profile"
                            </A>
                        }.into_view()
                    } else {
                        view! {
                            <A href="/login" class="font-semibold py-1.5 px-6 bg-[#442D1D] text-white border border-[#442D1D] rounded-3xl hover:bg-transparent hover:text-[#442D1D] transition duration-200">
                                "Login"
                            </A>
                        }.into_view()
                    }}
                </nav>

                <button
                    on:click=move |_| menu.update(Toggle::toggle)
                    class="md:hidden ml-2 text-[#442D1D] text-2xl focus:outline-none"
                >
                    {move || if menu.get().is_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu.get().is_open()>
                <div class="md:hidden absolute top-full left-0 w-full bg-[#F4EFEB] shadow-lg flex flex-col px-6 py-4 space-y-3 z-40">
                    <MenuLink href=Signal::derive(|| "/beranda".to_string()) label="Home" menu=menu />
                    <MenuLink href=Signal::derive(|| "/gallery-walls".to_string()) label="Gallery Walls" menu=menu />
                    <MenuLink href=Signal::derive(add_href) label="Add Artwork" menu=menu />
                    {move || if signed_in() {
                        view! { <MenuLink href=Signal::derive(|| Route::Profile.path()) label="Profile" menu=menu /> }.into_view()
                    } else {
                        view! { <MenuLink href=Signal::derive(|| Route::Login.path()) label="Login" menu=menu /> }.into_view()
                    }}
                </div>
            </Show>
        </header>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href class="hover:text-amber-700 transition duration-150" active_class="text-amber-700">
            {label}
        </A>
    }
}

#[component]
fn MenuLink(href: Signal<String>, label: &'static str, menu: RwSignal<Toggle>) -> impl IntoView {
    view! {
        <div on:click=move |_| menu.update(Toggle::close)>
            <A
                href=move || href.get()
                class="block w-full text-center py-3 bg-white shadow-sm rounded-xl text-[#442D1D] text-lg font-medium"
            >
                {label}
            </A>
        </div>
    }
}
