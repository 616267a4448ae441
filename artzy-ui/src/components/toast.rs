//! Toast Notification Component
//!
//! Success and error popups with a shrinking countdown bar.

use leptos::*;

use artzy::toast::{Toast, ToastKind};

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn ToastStack() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-6 right-4 z-[60] space-y-3">
            <For
                each=move || state.toasts.get().iter().cloned().collect::<Vec<_>>()
                key=|toast| toast.id.clone()
                children=move |toast| view! { <ToastMessage toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(toast: Toast) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (icon, accent) = match toast.kind {
        ToastKind::Success => ("✓", "bg-green-600"),
        ToastKind::Error => ("✕", "bg-red-600"),
    };
    let id = toast.id.clone();

    view! {
        <div class="relative w-80 bg-white text-[#442D1D] rounded-xl shadow-lg overflow-hidden animate-slide-in">
            <div class="flex items-start gap-3 px-4 py-3">
                <span class=format!("flex-shrink-0 w-6 h-6 rounded-full {} text-white text-sm flex items-center justify-center", accent)>
                    {icon}
                </span>
                <div class="flex-1">
                    <p class="font-bold text-sm">{toast.kind.title()}</p>
                    <p class="text-sm">{toast.message.clone()}</p>
                </div>
                <button
                    on:click=move |_| state.dismiss_toast(&id)
                    class="text-gray-400 hover:text-gray-600"
                >
                    "✕"
                </button>
            </div>
            <div
                class=format!("absolute bottom-0 left-0 h-1 {} toast-progress", accent)
                style=format!("animation-duration: {}ms", toast.duration_ms)
            />
        </div>
    }
}
