//! Browser Helpers
//!
//! Thin wrappers over `window` APIs: alerts, session storage, file reads.

use wasm_bindgen_futures::JsFuture;

use crate::api::ImageUpload;
use crate::error::ApiError;
use crate::session::{Session, SESSION_STORAGE_KEY};

/// Blocking alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

pub fn load_session() -> Option<Session> {
    let raw = session_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    Session::from_storage(&raw)
}

pub fn save_session(session: &Session) {
    let Some(storage) = session_storage() else { return };
    match session.to_storage() {
        Ok(raw) => {
            if storage.set_item(SESSION_STORAGE_KEY, &raw).is_err() {
                log::warn!("[SESSION] Could not persist session");
            }
        }
        Err(e) => log::warn!("[SESSION] Could not encode session: {}", e),
    }
}

pub fn clear_session() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

/// Read a picked file into memory for upload
pub async fn read_image(file: &web_sys::File) -> Result<ImageUpload, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Network(format!("Could not read file: {:?}", e)))?;
    Ok(ImageUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
