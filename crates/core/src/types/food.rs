//! Catalog (menu) item records.

use serde::{Deserialize, Serialize};
use url::Url;

use super::id::FoodId;
use super::price::Price;

/// A menu item as stored in the backend catalog collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Backend document ID.
    pub id: FoodId,
    /// Display name.
    pub name: String,
    /// Short description shown on the menu and detail pages.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Free-form category used by the menu filter (e.g. "Burgers", "Sides").
    pub category: String,
    /// Optional image reference from the blob store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Url>,
}

/// The writable fields of a menu item; the backend mints the ID on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDraft {
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Free-form category.
    pub category: String,
    /// Optional image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Url>,
}

impl FoodDraft {
    /// Attach a backend-minted ID, producing the full item record.
    #[must_use]
    pub fn into_item(self, id: FoodId) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image_url: self.image_url,
        }
    }
}
