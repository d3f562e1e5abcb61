//! Profile Screen
//!
//! Current user's details and profile image upload.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, Gateway};
use crate::browser;
use crate::context::{use_config, use_gateway};
use crate::error::ApiError;
use crate::models;
use crate::routes;

async fn upload(gateway: &Gateway, file: web_sys::File) -> Result<(), ApiError> {
    let image = browser::read_image(&file).await?;
    api::upload_profile_image(gateway, image).await
}

#[component]
pub fn Profile() -> impl IntoView {
    let config = use_config();
    let gateway = use_gateway();
    let navigate = use_navigate();

    let (profile, set_profile) = signal(None::<models::Profile>);
    let file_input: NodeRef<Input> = NodeRef::new();

    let load = move || {
        let gateway = gateway.get_value();
        spawn_local(async move {
            match api::fetch_profile(&gateway).await {
                Ok(loaded) => set_profile.set(Some(loaded)),
                // 401 has already ended the session; the guard redirects
                Err(e) => log::warn!("[PROFILE] Failed to load profile: {}", e),
            }
        });
    };

    Effect::new(move |_| load());

    let on_upload = move |_| {
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            browser::alert("Please select a file.");
            return;
        };
        let gateway = gateway.get_value();
        spawn_local(async move {
            match upload(&gateway, file).await {
                Ok(()) => {
                    browser::alert("Image updated successfully.");
                    load();
                }
                Err(ApiError::Unauthorized) => {}
                Err(ApiError::Network(e)) => {
                    log::warn!("[PROFILE] Upload failed: {}", e);
                    browser::alert("Error uploading image.");
                }
                Err(e) => browser::alert(&format!("Failed to update image: {}", e.message())),
            }
        });
    };

    let on_logout = move |_| navigate(routes::LOGOUT, Default::default());

    let details = move || {
        let Some(data) = profile.get() else {
            return view! { <div class="loading">"Loading..."</div> }.into_any();
        };
        let image = match &data.profile_image {
            Some(path) => view! {
                <img src=config.url(path) alt="Profile" class="profile-image" />
            }
            .into_any(),
            None => view! { <div class="no-image-placeholder">"No Profile Image"</div> }.into_any(),
        };
        let rows = [
            ("ID:", data.id.clone()),
            ("Email:", data.email.clone()),
            ("Username:", data.username.clone()),
            ("First Name:", data.firstname.clone()),
            ("Last Name:", data.lastname.clone()),
        ];
        view! {
            <div class="profile-content">
                <div class="profile-image-section">{image}</div>
                <div class="profile-info">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="info-row">
                                    <span class="info-label">{label}</span>
                                    <span class="info-value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="info-row">
                        <span class="info-label">"Status:"</span>
                        <span class=data.status_class()>{data.status.clone().unwrap_or_default()}</span>
                    </div>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="profile-container">
            <div class="profile-card">
                <div class="profile-header">
                    <h2>"User Profile"</h2>
                    <button on:click=on_logout class="logout-btn">"Logout"</button>
                </div>
                {details}
                <div class="image-upload-section">
                    <label for="profileImage" class="upload-label">"Update Profile Image:"</label>
                    <input
                        type="file"
                        id="profileImage"
                        name="profileImage"
                        accept="image/*"
                        class="file-input"
                        node_ref=file_input
                    />
                    <button on:click=on_upload class="upload-btn">"Upload Image"</button>
                </div>
            </div>
        </div>
    }
}
