//! One catalog item's entry in the shopper's cart.

use serde::{Deserialize, Serialize};
use url::Url;

use super::food::FoodItem;
use super::id::FoodId;
use super::price::Price;
use super::quantity::Quantity;

/// One shopper selection, keyed by catalog item ID.
///
/// Display fields (`name`, `price`, `image_url`) are captured at add-time and
/// never re-fetched, so a later menu edit does not rewrite a cart in progress.
/// The wire shape is the camelCase JSON document the web client has always
/// persisted: `{"id","name","price","quantity","imageUrl"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Identifier of the referenced catalog item.
    pub id: FoodId,
    /// Display name captured at add-time.
    pub name: String,
    /// Unit price captured at add-time.
    pub price: Price,
    /// Number of units; strictly positive while the line exists.
    pub quantity: Quantity,
    /// Optional display image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Url>,
}

impl CartLine {
    /// Build a line for `quantity` units of a catalog item.
    #[must_use]
    pub fn for_item(item: &FoodItem, quantity: Quantity) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity,
            image_url: item.image_url.clone(),
        }
    }

    /// The extended amount for this line (`price` × `quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.extend(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn line_total_is_price_times_quantity() {
        let line = CartLine {
            id: FoodId::new("x"),
            name: "Burger".to_owned(),
            price: Price::new("8.5".parse::<Decimal>().expect("decimal")).expect("price"),
            quantity: Quantity::new(3).expect("quantity"),
            image_url: None,
        };
        assert_eq!(
            line.line_total().amount(),
            "25.5".parse::<Decimal>().expect("decimal")
        );
    }

    #[test]
    fn wire_shape_is_camel_case_and_omits_missing_image() {
        let line = CartLine {
            id: FoodId::new("a"),
            name: "Chips".to_owned(),
            price: Price::new(Decimal::from(3)).expect("price"),
            quantity: Quantity::ONE,
            image_url: None,
        };
        let json = serde_json::to_value(&line).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({"id": "a", "name": "Chips", "price": "3", "quantity": 1})
        );
    }
}
