//! Home & API Test Pages
//!
//! Both hit `GET /api/hello`; the test page shows the raw JSON.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_gateway;
use crate::routes;

#[component]
pub fn Home() -> impl IntoView {
    let gateway = use_gateway();
    let (message, set_message) = signal(String::from("Loading..."));

    Effect::new(move |_| {
        let gateway = gateway.get_value();
        spawn_local(async move {
            match api::hello(&gateway).await {
                Ok(hello) => set_message.set(hello.message),
                Err(e) => log::error!("[HOME] Hello probe failed: {}", e),
            }
        });
    });

    view! {
        <div class="home">
            <h1>"Home Page"</h1>
            <p>"Message: " {move || message.get()}</p>
            <a href=routes::TEST_API>
                <button>"Go to Test API"</button>
            </a>
        </div>
    }
}

#[component]
pub fn TestApi() -> impl IntoView {
    let gateway = use_gateway();
    let (data, set_data) = signal(None::<String>);

    Effect::new(move |_| {
        let gateway = gateway.get_value();
        spawn_local(async move {
            match api::probe(&gateway).await {
                Ok(value) => {
                    let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
                    set_data.set(Some(pretty));
                }
                Err(e) => log::error!("[TEST_API] Error fetching data: {}", e),
            }
        });
    });

    move || match data.get() {
        Some(json) => view! { <pre class="api-dump">{json}</pre> }.into_any(),
        None => view! { <div class="api-dump loading">"Loading..."</div> }.into_any(),
    }
}
