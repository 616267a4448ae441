//! Route Guard
//!
//! Renders a page only when the current session may see it, otherwise
//! navigates to where [`artzy::access::check`] points.

use leptos::*;
use leptos_router::*;

use artzy::{access, Access, Route};

use crate::components::Loading;
use crate::state::GlobalState;

#[component]
pub fn Guarded(route: Route, children: ChildrenFn) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let for_effect = route.clone();
    create_effect(move |_| {
        if let Access::Redirect(target) = access::check(&for_effect, state.session.get().as_ref()) {
            navigate(&target.path(), Default::default());
        }
    });

    move || match access::check(&route, state.session.get().as_ref()) {
        Access::Allow => children().into_view(),
        Access::Redirect(_) => view! { <Loading /> }.into_view(),
    }
}
