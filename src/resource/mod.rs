//! Resource Layer - Core Traits
//!
//! Describes a backend collection (items, users) and the abstract
//! interface used to list and mutate it. Implementations can use the
//! HTTP gateway or an in-memory fake.

mod item;
mod user;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::Page;

pub use item::{ItemForm, Items};
pub use user::{UserForm, Users};

/// A backend collection bound to one list+form screen
pub trait Resource: 'static {
    /// Row as returned by the list endpoint
    type Record: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;
    /// Editable form state
    type Form: Clone + Default + PartialEq + Send + Sync + 'static;

    /// Collection path, e.g. `/api/item`
    const PATH: &'static str;
    /// Key of the record array in the list envelope
    const LIST_KEY: &'static str;
    /// Singular noun used in messages
    const NOUN: &'static str;

    fn id(record: &Self::Record) -> &str;

    /// Prefill the form for editing an existing record
    fn form_from(record: &Self::Record) -> Self::Form;

    /// JSON body for create (`editing == false`) or update
    fn payload(form: &Self::Form, editing: bool) -> Result<serde_json::Value, ApiError>;

    fn fetch_failed_message() -> String {
        format!("Failed to fetch {}", Self::LIST_KEY)
    }

    fn save_failed_message() -> String {
        format!("Failed to save {}", Self::NOUN)
    }

    fn delete_failed_message() -> String {
        format!("Failed to delete {}", Self::NOUN)
    }
}

/// A write against a collection
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(serde_json::Value),
    Update { id: String, payload: serde_json::Value },
    Delete(String),
}

/// Data access for one resource
#[async_trait(?Send)]
pub trait ResourceBackend<R: Resource> {
    /// Fetch one page
    async fn list(&self, page: u32, limit: u32) -> Result<Page<R::Record>, ApiError>;

    /// Issue a create, update or delete
    async fn apply(&self, mutation: Mutation) -> Result<(), ApiError>;
}

/// Read a required text field, trimmed
pub(crate) fn required(value: &str, label: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Invalid(format!("{} is required", label)));
    }
    Ok(trimmed.to_string())
}
