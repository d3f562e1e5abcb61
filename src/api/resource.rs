//! Collection Bindings
//!
//! `ResourceBackend` over HTTP for any `Resource` (items, users).

use async_trait::async_trait;
use reqwest::Method;

use super::{record_path, Gateway};
use crate::error::ApiError;
use crate::models::Page;
use crate::resource::{Mutation, Resource, ResourceBackend};

#[async_trait(?Send)]
impl<R: Resource> ResourceBackend<R> for Gateway {
    async fn list(&self, page: u32, limit: u32) -> Result<Page<R::Record>, ApiError> {
        let path = format!("{}?page={}&limit={}", R::PATH, page, limit);
        let body: serde_json::Value = self.get_json(&path, &R::fetch_failed_message()).await?;
        Page::from_envelope(body, R::LIST_KEY)
    }

    async fn apply(&self, mutation: Mutation) -> Result<(), ApiError> {
        match mutation {
            Mutation::Create(payload) => {
                self.send_json(Method::POST, R::PATH, &payload, &R::save_failed_message()).await?;
            }
            Mutation::Update { id, payload } => {
                let path = record_path(R::PATH, &id);
                self.send_json(Method::PUT, &path, &payload, &R::save_failed_message()).await?;
            }
            Mutation::Delete(id) => {
                let path = record_path(R::PATH, &id);
                log::debug!("[API] DELETE {}", path);
                self.send(self.request(Method::DELETE, &path), &R::delete_failed_message()).await?;
            }
        }
        Ok(())
    }
}
