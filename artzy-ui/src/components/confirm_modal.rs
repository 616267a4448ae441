//! Confirm Modal
//!
//! Destructive-action confirmation dialog.

use leptos::*;

#[component]
pub fn ConfirmModal(
    open: RwSignal<bool>,
    #[prop(into, default = "Delete Artwork?".to_string())]
    title: String,
    #[prop(into, default = "This artwork will be permanently deleted. Are you sure?".to_string())]
    message: String,
    #[prop(into)]
    on_confirm: Callback<()>,
) -> impl IntoView {
    let close = move |_| open.set(false);

    move || {
        if !open.get() {
            return view! {}.into_view();
        }

        view! {
            <div class="fixed inset-0 z-50 flex items-center justify-center px-4">
                <div class="absolute inset-0 bg-black/50 backdrop-blur-sm" on:click=close />

                <div class="relative bg-white/85 rounded-2xl shadow-2xl w-full max-w-sm overflow-hidden">
                    <button on:click=close class="absolute top-4 right-4 text-gray-400 hover:text-gray-600">
                        "✕"
                    </button>

                    <div class="pt-10 pb-8 px-8 text-center">
                        <div class="w-16 h-16 mx-auto mb-6 rounded-full bg-red-200 flex items-center justify-center text-3xl text-red-600">
                            "⚠"
                        </div>
                        <h3 class="text-xl font-extrabold text-gray-900 mb-2">{title.clone()}</h3>
                        <p class="text-gray-600 text-sm leading-relaxed">{message.clone()}</p>
                    </div>

                    <div class="flex border-t border-gray-100">
                        <button
                            on:click=close
                            class="flex-1 py-4 text-gray-600 font-semibold hover:bg-gray-300 transition rounded-bl-2xl"
                        >
                            "Cancel"
                        </button>
                        <button
                            on:click=move |_| {
                                on_confirm.call(());
                                open.set(false);
                            }
                            class="flex-1 py-4 bg-red-600 text-white font-semibold hover:bg-red-700 transition rounded-br-2xl"
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_view()
    }
}
