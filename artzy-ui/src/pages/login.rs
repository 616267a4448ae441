//! Login Page

use leptos::*;
use leptos_router::*;

use artzy::forms::LoginForm;
use artzy::{toast, Route};

use crate::api;
use crate::components::{AuthLayout, Guarded, PasswordInput};
use crate::state::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    view! {
        <Guarded route=Route::Login>
            <LoginView />
        </Guarded>
    }
}

#[component]
fn LoginView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match api::login(&request).await {
                Ok(token) => state.sign_in(&token),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    state.show_success(toast::LOGIN_SUCCESS);
                    navigate(&Route::Beranda.path(), Default::default());
                }
                Err(e) => state.report(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <AuthLayout back_href="/".to_string()>
            <h1 class="text-4xl font-extrabold">"Welcome Back"</h1>
            <p class="opacity-80">"Log in to your personal gallery"</p>

            <form on:submit=on_submit class="w-full flex flex-col gap-4">
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    class="w-full px-4 py-3 rounded-xl border border-[#442D1D]/40 bg-transparent focus:outline-none focus:border-[#442D1D]"
                />
                <PasswordInput value=password />

                <A
                    href=format!("{}?from={}", Route::ForgotPassword.path(), Route::Login.path())
                    class="self-end text-sm italic hover:underline"
                >
                    "Forgot password?"
                </A>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 rounded-full bg-[#442D1D] text-white font-semibold hover:bg-[#5e3f2b] disabled:opacity-60 transition"
                >
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>

            <p class="text-sm">
                "Don't have an account? "
                <A href="/register" class="font-semibold underline">"Register"</A>
            </p>
        </AuthLayout>
    }
}
