//! Frontend Models
//!
//! Data structures matching backend JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

/// Inventory item status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Active,
    Inactive,
    OutOfStock,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [Self::Active, Self::Inactive, Self::OutOfStock];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::OutOfStock => "OUT_OF_STOCK",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::OutOfStock => "Out of Stock",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
    Deleted,
}

impl UserStatus {
    pub const ALL: [UserStatus; 3] = [Self::Active, Self::Suspended, Self::Deleted];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Deleted => "DELETED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Deleted => "Deleted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "itemName")]
    pub name: String,
    #[serde(rename = "itemCategory", default)]
    pub category: String,
    #[serde(rename = "itemPrice", deserialize_with = "de_price")]
    pub price: f64,
    #[serde(default)]
    pub status: ItemStatus,
}

impl Item {
    /// Price as shown in the table, e.g. `$12.50`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// The backend may return prices as numbers or numeric strings
fn de_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// User data structure (password is write-only and never read back)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub status: UserStatus,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Pagination metadata returned with every list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub total_pages: u32,
}

impl Pagination {
    /// State before the first fetch
    pub fn initial(limit: u32) -> Self {
        Self { page: 1, limit, total: 0, total_pages: 0 }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Total pages as displayed; an empty collection still shows one page
    pub fn display_total_pages(&self) -> u32 {
        self.total_pages.max(1)
    }
}

/// One page of a server-side collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T: DeserializeOwned> Page<T> {
    /// Parse a `{ <key>: [...], pagination: {...} }` list envelope.
    ///
    /// A missing collection key is an empty page.
    pub fn from_envelope(body: serde_json::Value, key: &str) -> Result<Self, ApiError> {
        let serde_json::Value::Object(mut map) = body else {
            return Err(ApiError::Decode("list response is not an object".to_string()));
        };
        let items = match map.remove(key) {
            Some(serde_json::Value::Null) | None => Vec::new(),
            Some(value) => serde_json::from_value(value)?,
        };
        let pagination = map
            .remove("pagination")
            .ok_or_else(|| ApiError::Decode("list response has no pagination".to_string()))?;
        let pagination = serde_json::from_value(pagination)?;
        Ok(Self { items, pagination })
    }
}

/// Logged-in user's profile (`GET /api/user/profile`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "profileImage", default)]
    pub profile_image: Option<String>,
}

impl Profile {
    /// CSS modifier for the status badge
    pub fn status_class(&self) -> String {
        match &self.status {
            Some(status) => format!("status-badge {}", status.to_lowercase()),
            None => "status-badge".to_string(),
        }
    }
}

/// `GET /api/hello` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_price_accepts_number_or_string() {
        let a: Item = serde_json::from_value(json!({
            "_id": "a1", "itemName": "Mouse", "itemCategory": "Electronics",
            "itemPrice": 19.5, "status": "ACTIVE"
        }))
        .unwrap();
        let b: Item = serde_json::from_value(json!({
            "_id": "b2", "itemName": "Cable", "itemCategory": "Electronics",
            "itemPrice": "4.25", "status": "OUT_OF_STOCK"
        }))
        .unwrap();

        assert_eq!(a.price, 19.5);
        assert_eq!(a.display_price(), "$19.50");
        assert_eq!(b.price, 4.25);
        assert_eq!(b.status, ItemStatus::OutOfStock);
    }

    #[test]
    fn test_item_status_round_trips_wire_names() {
        for status in ItemStatus::ALL {
            assert_eq!(ItemStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ItemStatus::parse("out_of_stock"), None);
    }

    #[test]
    fn test_page_from_envelope() {
        let body = json!({
            "users": [
                {"_id": "u1", "username": "ann", "email": "ann@example.com",
                 "firstname": "Ann", "lastname": "Lee", "status": "SUSPENDED"}
            ],
            "pagination": {"page": 2, "limit": 10, "total": 11, "totalPages": 2}
        });
        let page: Page<User> = Page::from_envelope(body, "users").unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].status, UserStatus::Suspended);
        assert_eq!(page.items[0].full_name(), "Ann Lee");
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[test]
    fn test_page_missing_collection_is_empty() {
        let body = json!({"pagination": {"page": 1, "limit": 5, "total": 0, "totalPages": 0}});
        let page: Page<Item> = Page::from_envelope(body, "items").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.display_total_pages(), 1);
    }

    #[test]
    fn test_page_without_pagination_is_decode_error() {
        let body = json!({"items": []});
        let err = Page::<Item>::from_envelope(body, "items").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_pagination_clamps() {
        let first = Pagination { page: 1, limit: 5, total: 12, total_pages: 3 };
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Pagination { page: 3, ..first };
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn test_profile_status_class() {
        let profile: Profile = serde_json::from_value(json!({
            "_id": "p1", "email": "a@b.c", "status": "ACTIVE", "profileImage": "/uploads/p1.png"
        }))
        .unwrap();
        assert_eq!(profile.status_class(), "status-badge active");
        assert_eq!(profile.profile_image.as_deref(), Some("/uploads/p1.png"));
    }
}
