//! Login Screen
//!
//! Email/password form; a logged-in visitor goes straight to the profile.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

use crate::context::{use_gateway, use_session};
use crate::routes;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let gateway = use_gateway();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (logging_in, set_logging_in) = signal(false);
    let (login_error, set_login_error) = signal(false);

    let on_login = move |_| {
        if logging_in.get_untracked() {
            return;
        }
        set_logging_in.set(true);
        let email = email.get_untracked();
        let password = password.get_untracked();
        let gateway = gateway.get_value();
        spawn_local(async move {
            let accepted = session.login(&gateway, &email, &password).await;
            set_logging_in.set(false);
            set_login_error.set(!accepted);
        });
    };

    view! {
        <Show
            when=move || !session.is_logged_in()
            fallback=|| view! { <Redirect path=routes::PROFILE /> }
        >
            <div class="login-container">
                <div class="login-card">
                    <h2>"User Login"</h2>
                    <table>
                        <tbody>
                            <tr>
                                <th>"Email"</th>
                                <td>
                                    <input
                                        type="text"
                                        name="email"
                                        id="email"
                                        placeholder="user@example.com"
                                        prop:value=move || email.get()
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                    />
                                </td>
                            </tr>
                            <tr>
                                <th>"Password"</th>
                                <td>
                                    <input
                                        type="password"
                                        name="password"
                                        id="password"
                                        placeholder="Your password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                    />
                                </td>
                            </tr>
                        </tbody>
                    </table>
                    <button on:click=on_login disabled=move || logging_in.get()>
                        {move || if logging_in.get() { "Logging in..." } else { "Login" }}
                    </button>
                    <Show when=move || login_error.get()>
                        <div class="error-message">"Login incorrect"</div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
