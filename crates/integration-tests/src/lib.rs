//! Integration tests for Chops & Chips.
//!
//! This crate holds in-memory doubles for the managed-backend collaborators
//! plus small builders the scenario tests under `tests/` share. The doubles
//! honor the contracts in `chops_and_chips_core::backend` exactly: backend-
//! minted IDs, `pending` status and creation time stamped on order create,
//! newest-first order listing.
//!
//! Run with `cargo test -p chops-and-chips-integration-tests`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use chops_and_chips_core::{
    AdminIdentity, BackendError, CartLine, CustomerDetails, Email, FoodDraft, FoodId, FoodItem,
    FoodRepository, IdentityGateway, Order, OrderDraft, OrderId, OrderRepository, OrderStatus,
    Price, Quantity, ThemeRepository, ThemeSettings,
};

/// Install a test-friendly tracing subscriber (idempotent across tests).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

/// Parse a decimal literal into a [`Price`].
///
/// # Panics
///
/// Panics on an invalid literal; test input is static.
#[must_use]
pub fn price(literal: &str) -> Price {
    Price::new(literal.parse::<Decimal>().expect("decimal literal")).expect("non-negative price")
}

/// Build a cart line without going through the catalog.
///
/// # Panics
///
/// Panics on a zero quantity; test input is static.
#[must_use]
pub fn cart_line(id: &str, name: &str, unit_price: &str, quantity: u32) -> CartLine {
    CartLine {
        id: FoodId::new(id),
        name: name.to_owned(),
        price: price(unit_price),
        quantity: Quantity::new(quantity).expect("positive quantity"),
        image_url: None,
    }
}

/// A checkout form submission.
///
/// # Panics
///
/// Panics on an invalid email; test input is static.
#[must_use]
pub fn customer(name: &str, email: &str) -> CustomerDetails {
    CustomerDetails {
        name: name.to_owned(),
        email: Email::parse(email).expect("valid email"),
        address: "1 High Street".to_owned(),
        phone: "0123 456 789".to_owned(),
    }
}

/// In-memory `foods` collection.
#[derive(Debug, Default)]
pub struct MemoryFoods {
    items: Vec<FoodItem>,
}

impl MemoryFoods {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog seeded with a small menu.
    ///
    /// # Panics
    ///
    /// Panics only if the static seed data is invalid.
    #[must_use]
    pub fn with_sample_menu() -> Self {
        let mut foods = Self::new();
        for (name, description, unit_price, category) in [
            ("Lamb Chops", "Chargrilled, with mint", "12.50", "Grill"),
            ("Beef Burger", "Smashed patty, brioche bun", "8.50", "Burgers"),
            ("Chips", "Twice cooked", "3.00", "Sides"),
            ("Halloumi Burger", "Grilled halloumi, harissa mayo", "7.90", "Burgers"),
        ] {
            foods
                .create(FoodDraft {
                    name: name.to_owned(),
                    description: description.to_owned(),
                    price: price(unit_price),
                    category: category.to_owned(),
                    image_url: None,
                })
                .expect("seed menu");
        }
        foods
    }
}

impl FoodRepository for MemoryFoods {
    fn create(&mut self, draft: FoodDraft) -> Result<FoodId, BackendError> {
        let id = FoodId::new(Uuid::new_v4().to_string());
        self.items.push(draft.into_item(id.clone()));
        Ok(id)
    }

    fn list(&self) -> Result<Vec<FoodItem>, BackendError> {
        Ok(self.items.clone())
    }

    fn update(&mut self, id: &FoodId, draft: FoodDraft) -> Result<(), BackendError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| BackendError::NotFound(id.to_string()))?;
        *item = draft.into_item(id.clone());
        Ok(())
    }

    fn delete(&mut self, id: &FoodId) -> Result<(), BackendError> {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() == before {
            return Err(BackendError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// In-memory `orders` collection.
#[derive(Debug, Default)]
pub struct MemoryOrders {
    // Insertion order; `list` reverses for the newest-first contract.
    orders: Vec<Order>,
    clock: Option<DateTime<Utc>>,
}

impl MemoryOrders {
    /// An empty collection stamping real timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the server timestamp (keeps assertions deterministic).
    #[must_use]
    pub fn with_fixed_clock(at: DateTime<Utc>) -> Self {
        Self {
            orders: Vec::new(),
            clock: Some(at),
        }
    }
}

impl OrderRepository for MemoryOrders {
    fn create(&mut self, draft: OrderDraft) -> Result<OrderId, BackendError> {
        let id = OrderId::new(Uuid::new_v4().to_string());
        self.orders.push(Order {
            id: id.clone(),
            customer: draft.customer,
            items: draft.items,
            total: draft.total,
            status: OrderStatus::Pending,
            created_at: self.clock.unwrap_or_else(Utc::now),
        });
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Order>, BackendError> {
        Ok(self.orders.iter().rev().cloned().collect())
    }

    fn get(&self, id: &OrderId) -> Result<Option<Order>, BackendError> {
        Ok(self.orders.iter().find(|order| &order.id == id).cloned())
    }

    fn set_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<(), BackendError> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| &order.id == id)
            .ok_or_else(|| BackendError::NotFound(id.to_string()))?;
        order.status = status;
        Ok(())
    }
}

/// In-memory `theme` collection.
#[derive(Debug, Default)]
pub struct MemoryTheme {
    current: Option<ThemeSettings>,
}

impl MemoryTheme {
    /// A collection with no saved theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeRepository for MemoryTheme {
    fn save(&mut self, settings: ThemeSettings) -> Result<(), BackendError> {
        self.current = Some(settings);
        Ok(())
    }

    fn load(&self) -> Result<Option<ThemeSettings>, BackendError> {
        Ok(self.current.clone())
    }
}

/// In-memory identity service with one provisioned admin account.
#[derive(Debug)]
pub struct MemoryIdentity {
    email: Email,
    password: String,
    signed_in: Option<AdminIdentity>,
}

impl MemoryIdentity {
    /// An identity service that accepts exactly this email/password pair.
    ///
    /// # Panics
    ///
    /// Panics on an invalid email; test input is static.
    #[must_use]
    pub fn with_account(email: &str, password: &str) -> Self {
        Self {
            email: Email::parse(email).expect("valid email"),
            password: password.to_owned(),
            signed_in: None,
        }
    }
}

impl IdentityGateway for MemoryIdentity {
    fn sign_in(&mut self, email: &Email, password: &str) -> Result<AdminIdentity, BackendError> {
        if email != &self.email || password != self.password {
            return Err(BackendError::Denied(
                "invalid email or password".to_owned(),
            ));
        }
        let identity = AdminIdentity {
            uid: Uuid::new_v4().to_string(),
            email: email.clone(),
        };
        self.signed_in = Some(identity.clone());
        Ok(identity)
    }

    fn sign_out(&mut self) -> Result<(), BackendError> {
        self.signed_in = None;
        Ok(())
    }

    fn current(&self) -> Option<&AdminIdentity> {
        self.signed_in.as_ref()
    }
}
