//! Forgot Password Page
//!
//! Sends a reset link, then returns to the login page after a pause. The
//! back link honours a `?from=` path, defaulting to beranda or home.

use leptos::*;
use leptos_router::*;

use artzy::access;
use artzy::forms::ForgotPasswordForm;
use artzy::{toast, Route};

use crate::api;
use crate::components::{AuthLayout, FormMessage};
use crate::state::GlobalState;

/// Pause before returning to login after a reset link was sent
const REDIRECT_DELAY_MS: u32 = 5000;

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();
    let query = use_query_map();

    let back_href = Signal::derive(move || {
        let from = query
            .with(|q| q.get("from").cloned())
            .map(|path| Route::parse(&path))
            .filter(|route| *route != Route::NotFound);
        access::forgot_password_back(from, state.session.get().as_ref()).path()
    });

    let email = create_rw_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (success, set_success) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_success.set(None);

        let request = match (ForgotPasswordForm { email: email.get() }).validate() {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::forgot_password(&request).await {
                Ok(()) => {
                    set_success.set(Some(toast::RESET_LINK_SENT.to_string()));
                    gloo_timers::callback::Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate(&Route::Login.path(), Default::default());
                    })
                    .forget();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <AuthLayout back_href=back_href>
            <h1 class="text-4xl font-extrabold">"Forgot Password"</h1>
            <p class="opacity-80">"Enter your email and we'll send you a reset link"</p>

            <form on:submit=on_submit class="w-full flex flex-col gap-4">
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    class="w-full px-4 py-3 rounded-xl border border-[#442D1D]/40 bg-transparent focus:outline-none focus:border-[#442D1D]"
                />

                <FormMessage message=error />
                <FormMessage message=success success=true />

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 rounded-full bg-[#442D1D] text-white font-semibold hover:bg-[#5e3f2b] disabled:opacity-60 transition"
                >
                    {move || if submitting.get() { "Sending..." } else { "Send Reset Link" }}
                </button>
            </form>
        </AuthLayout>
    }
}
