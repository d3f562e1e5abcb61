//! Auth & Profile Commands
//!
//! Login/logout and the current user's profile.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;

use super::Gateway;
use crate::error::ApiError;
use crate::models::Profile;
use crate::session::SessionUser;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

/// Image picked for upload
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

pub async fn login(gateway: &Gateway, email: &str, password: &str) -> Result<SessionUser, ApiError> {
    let response = gateway
        .send_json(Method::POST, "/api/user/login", &LoginArgs { email, password }, "Login incorrect")
        .await?;
    let body = response.text().await.unwrap_or_default();
    Ok(SessionUser::from_login_body(&body, email))
}

pub async fn logout(gateway: &Gateway) -> Result<(), ApiError> {
    log::debug!("[API] POST /api/user/logout");
    gateway
        .send(gateway.request(Method::POST, "/api/user/logout"), "Logout failed")
        .await?;
    Ok(())
}

pub async fn fetch_profile(gateway: &Gateway) -> Result<Profile, ApiError> {
    gateway.get_json("/api/user/profile", "Failed to load profile").await
}

/// Multipart upload with the image under field `file`
pub async fn upload_profile_image(gateway: &Gateway, image: ImageUpload) -> Result<(), ApiError> {
    let mut part = Part::bytes(image.bytes).file_name(image.file_name);
    if !image.mime_type.is_empty() {
        part = part.mime_str(&image.mime_type)?;
    }
    let form = Form::new().part("file", part);
    log::debug!("[API] POST /api/user/profile/image");
    gateway
        .send(
            gateway.request(Method::POST, "/api/user/profile/image").multipart(form),
            "Failed to upload image",
        )
        .await?;
    Ok(())
}
