//! User Management Screen
//!
//! Paginated user table with create/edit modal. The password is write-only:
//! edits start blank and a blank password is left out of the update.

use leptos::prelude::*;

use super::{status_class, use_screen, DeleteConfirmButton, PaginationBar, ScreenHandle};
use crate::context::use_config;
use crate::models::{User, UserStatus};
use crate::resource::{UserForm, Users};
use crate::screen::{Confirmation, ScreenState};

#[component]
pub fn UserManagement() -> impl IntoView {
    let config = use_config();
    let handle = use_screen::<Users>(config.user_page_limit);

    let body = move || {
        let state = handle.screen.with(|s| s.state.clone());
        match state {
            ScreenState::Idle | ScreenState::Loading => {
                view! { <div class="loader">"Loading users..."</div> }.into_any()
            }
            ScreenState::Error(message) => view! {
                <div class="error-display">
                    <p>"⚠️ " {message}</p>
                    <button class="btn-retry" on:click=move |_| handle.reload()>
                        "Retry Connection"
                    </button>
                </div>
            }
            .into_any(),
            ScreenState::Loaded => {
                let users = handle.screen.with(|s| s.records.clone());
                if users.is_empty() {
                    view! { <div class="no-data">"No users found. Start by adding one!"</div> }.into_any()
                } else {
                    view! { <UserTable users=users handle=handle /> }.into_any()
                }
            }
        }
    };

    view! {
        <div class="user-container">
            <header class="user-header">
                <h1>"User Management"</h1>
                <button class="btn-add" on:click=move |_| handle.open_create()>
                    "+ Add New User"
                </button>
            </header>

            <div class="table-container">{body}</div>

            <PaginationBar
                pagination=Signal::derive(move || handle.screen.with(|s| s.pagination))
                on_page=move |page: u32| handle.load(page)
            />

            <Show when=move || handle.is_form_open()>
                <UserFormModal handle=handle />
            </Show>
        </div>
    }
}

#[component]
fn UserTable(users: Vec<User>, handle: ScreenHandle<Users>) -> impl IntoView {
    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"Username"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| {
                        let id = user.id.clone();
                        let record = user.clone();
                        view! {
                            <tr>
                                <td>
                                    <div class="user-name-cell">{user.username.clone()}</div>
                                </td>
                                <td>{user.full_name()}</td>
                                <td class="email-cell">{user.email.clone()}</td>
                                <td>
                                    <span class=status_class(user.status.as_str())>
                                        {user.status.as_str()}
                                    </span>
                                </td>
                                <td>
                                    <div class="table-actions">
                                        <button
                                            class="btn-edit-sm"
                                            on:click=move |_| handle.open_edit(&record)
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="btn-delete-sm"
                                            on_confirm=move |choice: Confirmation| handle.delete(id.clone(), choice)
                                        />
                                    </div>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Text input bound to one `UserForm` field
#[component]
fn UserField(
    handle: ScreenHandle<Users>,
    label: &'static str,
    name: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    get: fn(&UserForm) -> String,
    set: fn(&mut UserForm, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                name=name
                required=true
                placeholder=placeholder
                prop:value=move || handle.form_value(get).unwrap_or_default()
                on:input=move |ev| handle.edit_form(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn UserFormModal(handle: ScreenHandle<Users>) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handle.submit();
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-content">
                <h2>{move || if handle.is_editing() { "Edit User" } else { "Add New User" }}</h2>
                <form on:submit=on_submit>
                    <UserField
                        handle=handle
                        label="Username"
                        name="username"
                        input_type="text"
                        placeholder="Username"
                        get=|f| f.username.clone()
                        set=|f, v| f.username = v
                    />
                    <div class="form-group">
                        <label>
                            {move || {
                                if handle.is_editing() {
                                    "Password (Leave blank to keep unchanged)"
                                } else {
                                    "Password"
                                }
                            }}
                        </label>
                        <input
                            type="password"
                            name="password"
                            required=move || !handle.is_editing()
                            placeholder="Password"
                            prop:value=move || handle.form_value(|f| f.password.clone()).unwrap_or_default()
                            on:input=move |ev| handle.edit_form(|f| f.password = event_target_value(&ev))
                        />
                    </div>
                    <UserField
                        handle=handle
                        label="Email"
                        name="email"
                        input_type="email"
                        placeholder="user@example.com"
                        get=|f| f.email.clone()
                        set=|f, v| f.email = v
                    />
                    <UserField
                        handle=handle
                        label="First Name"
                        name="firstname"
                        input_type="text"
                        placeholder="First Name"
                        get=|f| f.firstname.clone()
                        set=|f, v| f.firstname = v
                    />
                    <UserField
                        handle=handle
                        label="Last Name"
                        name="lastname"
                        input_type="text"
                        placeholder="Last Name"
                        get=|f| f.lastname.clone()
                        set=|f, v| f.lastname = v
                    />
                    <div class="form-group">
                        <label>"Status"</label>
                        <select
                            name="status"
                            on:change=move |ev| {
                                if let Some(status) = UserStatus::parse(&event_target_value(&ev)) {
                                    handle.edit_form(|f| f.status = status);
                                }
                            }
                        >
                            {UserStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option
                                            value=status.as_str()
                                            prop:selected=move || {
                                                handle.form_value(|f| f.status == status).unwrap_or(false)
                                            }
                                        >
                                            {status.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-cancel" on:click=move |_| handle.close_form()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-save" disabled=move || handle.is_submitting()>
                            {move || if handle.is_editing() { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
