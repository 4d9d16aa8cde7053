//! The cart store: aggregate ownership, dispatch, and change observers.

use chops_and_chips_core::{CartLine, FoodId, Price};
use tracing::{debug, warn};

use crate::aggregate::CartAggregate;
use crate::reducer::{self, CartAction};
use crate::storage::KeyValueStore;

/// The fixed local-storage key the cart mirror lives under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Receives the new aggregate after every applied action.
///
/// Observers run synchronously on the dispatching thread, after the state
/// change is already committed in memory. An observer cannot veto or roll
/// back a mutation.
pub trait CartObserver {
    /// Called with the aggregate that resulted from the latest action.
    fn cart_changed(&mut self, aggregate: &CartAggregate);
}

/// Observer that mirrors the aggregate into a [`KeyValueStore`].
///
/// Writes are best-effort: a failure is logged at warn level and otherwise
/// ignored. The in-memory aggregate stays authoritative for the session.
pub struct StoragePersister<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> StoragePersister<S> {
    /// Persist into `storage` under [`CART_STORAGE_KEY`].
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: KeyValueStore> CartObserver for StoragePersister<S> {
    fn cart_changed(&mut self, aggregate: &CartAggregate) {
        let encoded = match serde_json::to_string(aggregate) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "failed to encode cart for persistence");
                return;
            }
        };
        if let Err(err) = self.storage.set(CART_STORAGE_KEY, &encoded) {
            warn!(error = %err, "cart persistence write failed, keeping in-memory state");
        }
    }
}

/// The process-wide cart, constructed explicitly and passed by reference to
/// every screen that needs it.
///
/// Mutations go through [`CartStore::dispatch`] (or the named convenience
/// methods), which applies the pure reducer and then notifies observers.
pub struct CartStore {
    aggregate: CartAggregate,
    observers: Vec<Box<dyn CartObserver>>,
}

impl CartStore {
    /// An empty cart with no observers. Useful for tests and for screens
    /// that explicitly opt out of persistence.
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            aggregate: CartAggregate::new(),
            observers: Vec::new(),
        }
    }

    /// Restore the prior session's cart from `storage` and keep mirroring
    /// into it.
    ///
    /// A missing, unreadable, or malformed persisted cart restores as empty;
    /// that is the cold-start case, not an error.
    #[must_use]
    pub fn with_persistence<S: KeyValueStore + 'static>(storage: S) -> Self {
        let aggregate = restore_aggregate(&storage);
        let mut store = Self {
            aggregate,
            observers: Vec::new(),
        };
        store.subscribe(Box::new(StoragePersister::new(storage)));
        store
    }

    /// Register an observer; it will see every subsequent change.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver>) {
        self.observers.push(observer);
    }

    /// Apply one action and notify observers with the resulting aggregate.
    pub fn dispatch(&mut self, action: CartAction) {
        self.aggregate = reducer::apply(std::mem::take(&mut self.aggregate), action);
        for observer in &mut self.observers {
            observer.cart_changed(&self.aggregate);
        }
    }

    /// Add a selection (merging with an existing line for the same item).
    pub fn add(&mut self, line: CartLine) {
        self.dispatch(CartAction::Add(line));
    }

    /// Set a line's quantity; non-positive removes, unknown ID is a no-op.
    pub fn set_quantity(&mut self, id: FoodId, quantity: i64) {
        self.dispatch(CartAction::SetQuantity { id, quantity });
    }

    /// Remove a line; unknown ID is a no-op.
    pub fn remove(&mut self, id: FoodId) {
        self.dispatch(CartAction::Remove(id));
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// The current aggregate.
    #[must_use]
    pub const fn aggregate(&self) -> &CartAggregate {
        &self.aggregate
    }

    /// The derived cart total.
    #[must_use]
    pub fn total(&self) -> Price {
        self.aggregate.total()
    }
}

fn restore_aggregate<S: KeyValueStore>(storage: &S) -> CartAggregate {
    let raw = match storage.get(CART_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no persisted cart, starting empty");
            return CartAggregate::new();
        }
        Err(err) => {
            warn!(error = %err, "persisted cart unreadable, starting empty");
            return CartAggregate::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(aggregate) => aggregate,
        Err(err) => {
            debug!(error = %err, "persisted cart malformed, starting empty");
            CartAggregate::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chops_and_chips_core::{Price, Quantity};
    use rust_decimal::Decimal;

    use crate::storage::MemoryStore;

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("decimal")
    }

    fn line(id: &str, price: &str, quantity: u32) -> CartLine {
        CartLine {
            id: FoodId::new(id),
            name: format!("item {id}"),
            price: Price::new(dec(price)).expect("price"),
            quantity: Quantity::new(quantity).expect("quantity"),
            image_url: None,
        }
    }

    /// Storage whose backing map is shared, so a test can inspect what the
    /// persister wrote and hand "the same medium" to a second store.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>, crate::StorageError> {
            self.0.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), crate::StorageError> {
            self.0.borrow_mut().set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), crate::StorageError> {
            self.0.borrow_mut().remove(key)
        }
    }

    /// Storage that always fails its writes.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, crate::StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), crate::StorageError> {
            Err(crate::StorageError::Io(std::io::Error::other("disk gone")))
        }

        fn remove(&mut self, _key: &str) -> Result<(), crate::StorageError> {
            Err(crate::StorageError::Io(std::io::Error::other("disk gone")))
        }
    }

    #[test]
    fn every_mutation_rewrites_the_mirror() {
        let medium = SharedStore::default();
        let mut store = CartStore::with_persistence(medium.clone());

        store.add(line("a", "5", 2));
        let mirrored = medium.get(CART_STORAGE_KEY).expect("readable");
        assert!(mirrored.expect("written").contains("\"a\""));

        store.clear();
        let mirrored = medium.get(CART_STORAGE_KEY).expect("readable");
        assert_eq!(mirrored.as_deref(), Some("[]"));
    }

    #[test]
    fn restores_the_persisted_aggregate_in_order() {
        let mut medium = SharedStore::default();
        medium
            .set(
                CART_STORAGE_KEY,
                r#"[{"id":"a","name":"Chops","price":5,"quantity":2},
                    {"id":"b","name":"Chips","price":3,"quantity":1}]"#,
            )
            .expect("seeded");

        let store = CartStore::with_persistence(medium);
        let lines = store.aggregate().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].id, FoodId::new("a"));
        assert_eq!(lines[1].id, FoodId::new("b"));
        assert_eq!(store.total().amount(), dec("13"));
    }

    #[test]
    fn malformed_persisted_cart_restores_as_empty() {
        let mut medium = SharedStore::default();
        medium
            .set(CART_STORAGE_KEY, "{not json")
            .expect("seeded");

        let store = CartStore::with_persistence(medium);
        assert!(store.aggregate().is_empty());
        assert_eq!(store.total(), Price::ZERO);
    }

    #[test]
    fn a_restart_sees_the_previous_sessions_cart() {
        let medium = SharedStore::default();
        {
            let mut first = CartStore::with_persistence(medium.clone());
            first.add(line("a", "5", 2));
            first.add(line("b", "3", 1));
        }

        let second = CartStore::with_persistence(medium);
        assert_eq!(second.aggregate().len(), 2);
        assert_eq!(second.total().amount(), dec("13"));
    }

    #[test]
    fn write_failures_never_disturb_in_memory_state() {
        let mut store = CartStore::with_persistence(BrokenStore);
        store.add(line("a", "5", 2));
        store.add(line("a", "5", 1));
        assert_eq!(store.aggregate().len(), 1);
        assert_eq!(store.total().amount(), dec("15"));
    }

    #[test]
    fn observers_see_the_committed_aggregate() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();

        struct Counter(Rc<RefCell<Vec<usize>>>);
        impl CartObserver for Counter {
            fn cart_changed(&mut self, aggregate: &CartAggregate) {
                self.0.borrow_mut().push(aggregate.len());
            }
        }

        let mut store = CartStore::in_memory();
        store.subscribe(Box::new(Counter(Rc::clone(&seen))));
        store.add(line("a", "5", 1));
        store.add(line("b", "3", 1));
        store.clear();

        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }
}
