//! Artwork Fields
//!
//! Image picker with preview plus the metadata inputs shared by the add
//! and edit artwork pages.

use leptos::*;

use artzy::forms::ArtworkForm;
use artzy::gallery::Category;

use crate::components::ImagePicker;

const INPUT_CLASS: &str =
    "w-full px-4 py-3 rounded-xl border border-[#442D1D]/40 bg-white/60 focus:outline-none focus:border-[#442D1D]";

#[component]
pub fn ArtworkFields(form: RwSignal<ArtworkForm>) -> impl IntoView {
    let on_pick = Callback::new(move |data_url: String| form.update(|f| f.image = data_url));

    let field = move |label: &'static str, kind: &'static str, get: fn(&ArtworkForm) -> String, set: fn(&mut ArtworkForm, String)| {
        view! {
            <label class="block">
                <span class="block text-sm font-semibold mb-1">{label}</span>
                <input
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                    class=INPUT_CLASS
                />
            </label>
        }
    };

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div class="flex flex-col items-center justify-center gap-4 border-2 border-dashed border-[#442D1D]/40 rounded-2xl p-6 min-h-[300px]">
                {move || match form.with(|f| f.image.clone()) {
                    image if image.is_empty() => view! {
                        <p class="opacity-70">"Drag and Drop Image Files to Upload"</p>
                    }.into_view(),
                    image => view! {
                        <img src=image alt="Preview" class="max-h-80 rounded-xl object-contain" />
                    }.into_view(),
                }}
                <ImagePicker on_pick=on_pick />
            </div>

            <div class="flex flex-col gap-4">
                {field("Title", "text", |f| f.title.clone(), |f, v| f.title = v)}
                {field("Artist", "text", |f| f.artist.clone(), |f, v| f.artist = v)}
                {field("Year", "date", |f| f.year.clone(), |f, v| f.year = v)}

                <label class="block">
                    <span class="block text-sm font-semibold mb-1">"Category"</span>
                    <select
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                        class=INPUT_CLASS
                    >
                        <option value="" selected=move || form.with(|f| f.category.is_empty())>
                            "Select category"
                        </option>
                        {Category::ALL_CHOICES
                            .into_iter()
                            .filter(|c| *c != Category::All)
                            .map(|c| view! {
                                <option
                                    value=c.label()
                                    selected=move || form.with(|f| f.category == c.label())
                                >
                                    {c.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>

                <label class="block">
                    <span class="block text-sm font-semibold mb-1">"Description"</span>
                    <textarea
                        placeholder="optional"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        class=format!("{} h-32", INPUT_CLASS)
                    />
                </label>
            </div>
        </div>
    }
}
