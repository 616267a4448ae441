//! Category Filter
//!
//! Dropdown that picks which category of artworks is shown.

use leptos::*;

use artzy::gallery::{Category, Toggle};

#[component]
pub fn CategoryFilter(selected: RwSignal<Category>) -> impl IntoView {
    let menu = create_rw_signal(Toggle::default());

    view! {
        <div class="flex justify-center md:justify-end w-full relative">
            <button
                on:click=move |_| menu.update(Toggle::toggle)
                class="flex items-center gap-2 bg-[#442D1D] text-white px-4 py-2 rounded-full shadow hover:bg-[#5e3f2b] transition"
            >
                <span>
                    {move || match selected.get() {
                        Category::All => "Filter Category".to_string(),
                        other => other.to_string(),
                    }}
                </span>
                <span class="text-xs">"▾"</span>
            </button>

            <Show when=move || menu.get().is_open()>
                <div class="absolute top-12 md:right-0 w-48 bg-white rounded-xl shadow-xl z-50 overflow-hidden text-center md:text-left">
                    {Category::ALL_CHOICES
                        .into_iter()
                        .map(|category| view! {
                            <button
                                on:click=move |_| {
                                    selected.set(category);
                                    menu.update(Toggle::close);
                                }
                                class="block w-full text-left px-4 py-2 text-sm hover:bg-gray-100 text-[#442D1D] border-b border-gray-100 last:border-0"
                            >
                                {category.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
