//! Menu management: CRUD over the catalog collection.

use tracing::info;

use chops_and_chips_core::{FoodDraft, FoodId, FoodItem, FoodRepository};

use crate::error::Result;

/// The menu management screen's operations, passed through to the catalog
/// repository.
pub struct Menu<'a, F: FoodRepository> {
    foods: &'a mut F,
}

impl<'a, F: FoodRepository> Menu<'a, F> {
    /// Menu management over `foods`.
    pub fn new(foods: &'a mut F) -> Self {
        Self { foods }
    }

    /// Every menu item, in collection order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the catalog cannot be
    /// read.
    pub fn list(&self) -> Result<Vec<FoodItem>> {
        Ok(self.foods.list()?)
    }

    /// Add a menu item; returns the backend-minted ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the write is rejected.
    pub fn create(&mut self, draft: FoodDraft) -> Result<FoodId> {
        let id = self.foods.create(draft)?;
        info!(food_id = %id, "menu item created");
        Ok(id)
    }

    /// Replace an item's writable fields.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the item does not
    /// exist or the write is rejected.
    pub fn update(&mut self, id: &FoodId, draft: FoodDraft) -> Result<()> {
        self.foods.update(id, draft)?;
        info!(food_id = %id, "menu item updated");
        Ok(())
    }

    /// Remove an item from the menu.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the item does not
    /// exist or the delete is rejected.
    pub fn delete(&mut self, id: &FoodId) -> Result<()> {
        self.foods.delete(id)?;
        info!(food_id = %id, "menu item deleted");
        Ok(())
    }
}
