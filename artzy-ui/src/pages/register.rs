//! Register Page

use leptos::*;
use leptos_router::*;

use artzy::forms::RegisterForm;
use artzy::{toast, Route};

use crate::api;
use crate::components::{AuthLayout, FormMessage, PasswordInput};
use crate::state::GlobalState;

#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let form = RegisterForm {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => {
                    state.show_success(toast::REGISTER_SUCCESS);
                    navigate(&Route::Login.path(), Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    let text_input = move |value: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full px-4 py-3 rounded-xl border border-[#442D1D]/40 bg-transparent focus:outline-none focus:border-[#442D1D]"
            />
        }
    };

    view! {
        <AuthLayout back_href="/".to_string()>
            <h1 class="text-4xl font-extrabold">"Create Account"</h1>
            <p class="opacity-80">"Start building your personal gallery"</p>

            <form on:submit=on_submit class="w-full flex flex-col gap-4">
                {text_input(username, "text", "Username")}
                {text_input(email, "email", "Email")}
                <PasswordInput value=password />
                <PasswordInput value=confirm_password placeholder="Confirm Password" />

                <FormMessage message=error />

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 rounded-full bg-[#442D1D] text-white font-semibold hover:bg-[#5e3f2b] disabled:opacity-60 transition"
                >
                    {move || if submitting.get() { "Registering..." } else { "Register" }}
                </button>
            </form>

            <p class="text-sm">
                "Already have an account? "
                <A href="/login" class="font-semibold underline">"Login"</A>
            </p>
        </AuthLayout>
    }
}
