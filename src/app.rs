//! Inventory Admin App
//!
//! Root component: context providers, navigation shell and the route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{
    Home, ItemManagement, Login, Logout, Navigation, Profile, RequireAuth, TestApi, UserManagement,
};
use crate::config::AppConfig;
use crate::context::SessionContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[APP] Using API at {}", config.api_base_url);

    // Session first: the gateway ends it on 401
    let session = SessionContext::restore();
    provide_context(session.gateway(&config));
    provide_context(session);
    provide_context(config);

    view! {
        <Router>
            <Navigation />
            <main class="main-content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/test_api") view=TestApi />
                    <Route path=path!("/login") view=Login />
                    <Route path=path!("/logout") view=Logout />
                    <Route
                        path=path!("/profile")
                        view=|| view! { <RequireAuth><Profile /></RequireAuth> }
                    />
                    <Route
                        path=path!("/items")
                        view=|| view! { <RequireAuth><ItemManagement /></RequireAuth> }
                    />
                    <Route
                        path=path!("/users")
                        view=|| view! { <RequireAuth><UserManagement /></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
