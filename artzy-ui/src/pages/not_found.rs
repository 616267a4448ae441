//! 404 page

use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center text-center bg-[#F4EFEB] text-[#442D1D]">
            <h1 class="text-6xl font-extrabold mb-2">"404"</h1>
            <p class="text-xl mb-6">"The page you're looking for doesn't exist."</p>
            <A href="/" class="px-6 py-3 bg-[#442D1D] text-white rounded-full font-medium">
                "Back to Artzy"
            </A>
        </div>
    }
}
