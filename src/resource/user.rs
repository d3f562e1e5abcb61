//! Users
//!
//! `/api/user` collection and its edit form.

use serde_json::{Map, Value};

use super::{required, Resource};
use crate::error::ApiError;
use crate::models::{User, UserStatus};

/// Marker for the user collection
#[derive(Debug, Clone, Copy)]
pub struct Users;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub username: String,
    /// Blank while editing means "keep the stored password"
    pub password: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub status: UserStatus,
}

impl Resource for Users {
    type Record = User;
    type Form = UserForm;

    const PATH: &'static str = "/api/user";
    const LIST_KEY: &'static str = "users";
    const NOUN: &'static str = "user";

    fn id(record: &User) -> &str {
        &record.id
    }

    fn form_from(record: &User) -> UserForm {
        UserForm {
            username: record.username.clone(),
            password: String::new(),
            email: record.email.clone(),
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            status: record.status,
        }
    }

    fn payload(form: &UserForm, editing: bool) -> Result<Value, ApiError> {
        let mut body = Map::new();
        body.insert("username".into(), required(&form.username, "Username")?.into());
        if !form.password.is_empty() {
            body.insert("password".into(), form.password.clone().into());
        } else if !editing {
            return Err(ApiError::Invalid("Password is required".to_string()));
        }
        body.insert("email".into(), required(&form.email, "Email")?.into());
        body.insert("firstname".into(), form.firstname.trim().into());
        body.insert("lastname".into(), form.lastname.trim().into());
        body.insert("status".into(), form.status.as_str().into());
        Ok(Value::Object(body))
    }
}
