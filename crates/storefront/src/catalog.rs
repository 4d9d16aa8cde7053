//! Menu browsing: listing, category filtering, item lookup.

use chops_and_chips_core::{FoodId, FoodItem, FoodRepository};

use crate::error::Result;

/// The pseudo-category that selects the whole menu.
pub const ALL_CATEGORY: &str = "All";

/// Read-side view over the menu catalog.
///
/// Stateless: every call goes straight to the repository, and the screen
/// holds whatever came back.
pub struct Catalog<'a, F: FoodRepository> {
    foods: &'a F,
}

impl<'a, F: FoodRepository> Catalog<'a, F> {
    /// A catalog view over `foods`.
    pub const fn new(foods: &'a F) -> Self {
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

    /// The filter chips for the menu page: [`ALL_CATEGORY`] followed by each
    /// distinct item category in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the catalog cannot be
    /// read.
    pub fn categories(&self) -> Result<Vec<String>> {
        let mut categories = vec![ALL_CATEGORY.to_owned()];
        for item in self.foods.list()? {
            if !categories.contains(&item.category) {
                categories.push(item.category);
            }
        }
        Ok(categories)
    }

    /// Menu items in `category`; [`ALL_CATEGORY`] selects everything.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the catalog cannot be
    /// read.
    pub fn by_category(&self, category: &str) -> Result<Vec<FoodItem>> {
        let mut items = self.foods.list()?;
        if category != ALL_CATEGORY {
            items.retain(|item| item.category == category);
        }
        Ok(items)
    }

    /// One menu item by ID, or `None` if it was removed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AppError::Backend`] if the catalog cannot be
    /// read.
    pub fn get(&self, id: &FoodId) -> Result<Option<FoodItem>> {
        Ok(self.foods.list()?.into_iter().find(|item| &item.id == id))
    }
}
