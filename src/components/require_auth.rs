//! Route Guard
//!
//! Renders protected views only for a logged-in session.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_session;
use crate::routes::{self, Access};

/// Renders children, or redirects to login when the session is anonymous.
/// UX only: the backend still checks every request.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || match routes::guard(&session.current_user()) {
        Access::Render => children().into_any(),
        Access::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
    }
}
