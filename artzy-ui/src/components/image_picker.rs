//! Image Picker
//!
//! File input that reads the chosen image into a `data:` URL.

use leptos::*;
use wasm_bindgen::JsCast;

use artzy::forms::{check_photo_size, FormError};
use artzy::media;

use crate::state::GlobalState;

#[component]
pub fn ImagePicker(
    /// Receives the image as a data URL
    #[prop(into)]
    on_pick: Callback<String>,
    /// Enforce the profile photo size limit
    #[prop(optional)]
    limit_size: bool,
    #[prop(into, default = "Choose Image".to_string())]
    label: String,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let handle_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let mime = file.type_();
        if !media::is_image_mime(&mime) {
            state.show_error(&FormError::NotAnImage.to_string());
            return;
        }
        if limit_size {
            if let Err(e) = check_photo_size(file.size() as u64) {
                state.show_error(&e.to_string());
                input.set_value("");
                return;
            }
        }

        let file_reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(_) => {
                web_sys::console::error_1(&"FileReader unavailable".into());
                return;
            }
        };

        let onload = {
            let file_reader = file_reader.clone();
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Ok(result) = file_reader.result() {
                    if let Some(array_buffer) = result.dyn_ref::<js_sys::ArrayBuffer>() {
                        let bytes = js_sys::Uint8Array::new(array_buffer).to_vec();
                        on_pick.call(media::encode_data_url(&bytes, Some(&mime)));
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };

        file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        if file_reader.read_as_array_buffer(&file).is_err() {
            state.show_error("Failed to read image");
        }
    };

    view! {
        <label class="inline-block cursor-pointer px-6 py-2 rounded-full bg-[#442D1D] text-white font-medium hover:scale-105 transition">
            {label}
            <input type="file" accept="image/*" class="hidden" on:change=handle_change />
        </label>
    }
}
