//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Placeholder card shown while artworks load
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="flex-grow flex items-center justify-center w-full px-4 h-96">
            <div class="w-full h-full max-w-sm bg-[#E8D1A7]/50 rounded-2xl animate-pulse" />
        </div>
    }
}
