//! Auth Layout
//!
//! Split-screen frame shared by the login, register and forgot-password
//! pages, plus a password field with a show/hide switch.

use leptos::*;
use leptos_router::*;

#[component]
pub fn AuthLayout(
    #[prop(into)]
    back_href: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row w-screen min-h-screen md:h-screen overflow-auto md:overflow-hidden bg-[#F4EFEB]">
            <div class="w-full md:w-2/5 flex flex-col justify-center items-center md:items-start px-6 md:px-24 py-10 gap-4 md:gap-6 text-[#442D1D] relative min-h-screen md:min-h-0">
                <div class="absolute top-6 left-6 md:top-8 md:left-8 text-xl">
                    <A href=move || back_href.get() class="flex items-center gap-1 hover:opacity-75 transition">
                        "← Back"
                    </A>
                </div>
                {children()}
            </div>
            <div class="hidden md:block md:w-3/5 h-full">
                <img src="/assets/fantasy-house.png" alt="Fantasy house painting" class="w-full h-full object-cover" />
            </div>
        </div>
    }
}

#[component]
pub fn PasswordInput(
    value: RwSignal<String>,
    #[prop(default = "Password")]
    placeholder: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <div class="relative w-full">
            <input
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full px-4 py-3 rounded-xl border border-[#442D1D]/40 bg-transparent focus:outline-none focus:border-[#442D1D]"
            />
            <button
                type="button"
                on:click=move |_| set_visible.update(|v| *v = !*v)
                class="absolute inset-y-0 right-4 text-sm text-[#442D1D]/70"
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}

/// Inline form error line
#[component]
pub fn FormMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
    #[prop(optional)]
    success: bool,
) -> impl IntoView {
    let class = if success { "text-green-700 text-sm" } else { "text-red-600 text-sm" };
    move || message.get().map(|m| view! { <p class=class>{m}</p> })
}
