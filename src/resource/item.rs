//! Inventory Items
//!
//! `/api/item` collection and its edit form.

use serde_json::json;

use super::{required, Resource};
use crate::error::ApiError;
use crate::models::{Item, ItemStatus};

/// Marker for the item collection
#[derive(Debug, Clone, Copy)]
pub struct Items;

/// Item form fields; price stays text until submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub status: ItemStatus,
}

impl ItemForm {
    fn parse_price(&self) -> Result<f64, ApiError> {
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ApiError::Invalid("Price must be a number".to_string()))?;
        if !price.is_finite() || price < 0.0 {
            return Err(ApiError::Invalid("Price must be a non-negative number".to_string()));
        }
        Ok(price)
    }
}

impl Resource for Items {
    type Record = Item;
    type Form = ItemForm;

    const PATH: &'static str = "/api/item";
    const LIST_KEY: &'static str = "items";
    const NOUN: &'static str = "item";

    fn id(record: &Item) -> &str {
        &record.id
    }

    fn form_from(record: &Item) -> ItemForm {
        ItemForm {
            name: record.name.clone(),
            category: record.category.clone(),
            price: format!("{:.2}", record.price),
            status: record.status,
        }
    }

    fn payload(form: &ItemForm, _editing: bool) -> Result<serde_json::Value, ApiError> {
        Ok(json!({
            "itemName": required(&form.name, "Item name")?,
            "itemCategory": required(&form.category, "Category")?,
            "itemPrice": form.parse_price()?,
            "status": form.status,
        }))
    }
}
