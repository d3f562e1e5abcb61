//! Navigation Bar
//!
//! Links depend on whether a session is active.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::context::use_session;
use crate::routes;

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    let links = move || {
        routes::nav_links(&session.current_user(), &location.pathname.get())
            .into_iter()
            .map(|link| view! { <a href=link.href class=link.class>{link.label}</a> })
            .collect_view()
    };

    let greeting = move || {
        let session = session.current_user();
        let user = session.user.filter(|_| session.is_logged_in)?;
        Some(view! { <span class="nav-user">{user.display_name().to_string()}</span> })
    };

    view! {
        <nav class="navbar">
            <div class="nav-brand">
                <a href=routes::HOME>"Inventory App"</a>
            </div>
            <div class="nav-links">
                {greeting}
                {links}
            </div>
        </nav>
    }
}
