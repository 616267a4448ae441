//! Edit Profile Page

use leptos::*;
use leptos_router::*;

use artzy::forms::ProfileForm;
use artzy::{format, toast, Route};

use crate::api;
use crate::components::{ConfirmModal, Guarded, ImagePicker, Loading, Nav};
use crate::state::GlobalState;

#[component]
pub fn EditProfile() -> impl IntoView {
    view! {
        <Guarded route=Route::EditProfile>
            <EditProfileView />
        </Guarded>
    }
}

#[component]
fn EditProfileView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = store_value(use_navigate());

    let form = create_rw_signal(ProfileForm::default());
    let (loading, set_loading) = create_signal(true);
    let (saving, set_saving) = create_signal(false);
    let remove_open = create_rw_signal(false);

    spawn_local(async move {
        match api::me().await {
            Ok(me) => form.set(ProfileForm::from_profile(&me)),
            Err(e) => state.report(&e),
        }
        set_loading.set(false);
    });

    let on_pick = Callback::new(move |data_url: String| form.update(|f| f.set_photo(data_url)));

    let remove_photo = Callback::new(move |_| {
        form.update(ProfileForm::clear_photo);
        state.show_success(toast::PHOTO_REMOVED);
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = form.with(ProfileForm::to_update);

        set_saving.set(true);
        spawn_local(async move {
            match api::update_profile(&update).await {
                Ok(()) => {
                    state.show_success(toast::PROFILE_UPDATED);
                    navigate.with_value(|nav| nav(&Route::Profile.path(), Default::default()));
                }
                Err(e) => state.report(&e),
            }
            set_saving.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&ProfileForm) -> String, set: fn(&mut ProfileForm, String)| {
        view! {
            <label class="block">
                <span class="block text-sm font-semibold mb-1">{label}</span>
                <input
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                    class="w-full px-4 py-3 rounded-xl border border-[#442D1D]/40 bg-white/60 focus:outline-none focus:border-[#442D1D]"
                />
            </label>
        }
    };

    view! {
        <div class="min-h-screen flex flex-col bg-[#F4EFEB] text-[#442D1D]">
            <Nav />

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <form on:submit=on_submit class="max-w-3xl mx-auto w-full px-6 py-10 flex flex-col gap-6">
                    <div class="flex items-center justify-between">
                        <h1 class="text-3xl md:text-4xl font-bold">"Edit Profile"</h1>
                        <A href="/profile" class="text-lg hover:opacity-75">"← Back"</A>
                    </div>

                    <div class="flex items-center gap-6">
                        {move || {
                            let photo = form.with(|f| f.profile_pic.clone());
                            if photo.is_empty() {
                                let initial = form.with(|f| format::avatar_initial(Some(&f.username)));
                                view! {
                                    <div class="w-24 h-24 rounded-full bg-[#442D1D] text-white text-4xl flex items-center justify-center">
                                        {initial}
                                    </div>
                                }
                                .into_view()
                            } else {
                                view! { <img src=photo alt="Profile" class="w-24 h-24 rounded-full object-cover" /> }.into_view()
                            }
                        }}
                        <div class="flex flex-col gap-2">
                            <ImagePicker on_pick=on_pick limit_size=true label="Change Photo" />
                            <Show when=move || form.with(ProfileForm::has_photo)>
                                <button
                                    type="button"
                                    on:click=move |_| remove_open.set(true)
                                    class="px-6 py-2 rounded-full border border-red-600 text-red-600 font-medium"
                                >
                                    "Remove Photo"
                                </button>
                            </Show>
                        </div>
                    </div>

                    {field("First Name", "text", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {field("Last Name", "text", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    {field("Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
                    {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}

                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="self-center px-10 py-3 rounded-full bg-[#442D1D] text-white font-medium text-lg disabled:opacity-60"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </Show>

            <ConfirmModal
                open=remove_open
                title="Delete photo profile?"
                message="Your profile photo will be permanently removed. Are you sure?"
                on_confirm=remove_photo
            />
        </div>
    }
}
