//! Logout Screen
//!
//! Ends the session on mount, then sends the user to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

use crate::context::{use_gateway, use_session};
use crate::routes;

#[component]
pub fn Logout() -> impl IntoView {
    let session = use_session();
    let gateway = use_gateway();
    let (done, set_done) = signal(false);

    Effect::new(move |_| {
        let gateway = gateway.get_value();
        spawn_local(async move {
            session.logout(&gateway).await;
            set_done.set(true);
        });
    });

    view! {
        <Show
            when=move || done.get()
            fallback=|| view! { <div class="logout-status"><h3>"Logging out..."</h3></div> }
        >
            <Redirect path=routes::LOGIN />
        </Show>
    }
}
