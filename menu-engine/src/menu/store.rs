//! Menu Store - the authoritative in-memory menu collection
//!
//! Items keep insertion order. The collection only changes through
//! [`MenuStore::add`] and [`MenuStore::remove`]; readers get slices or a
//! [`MenuSnapshot`].

use super::error::{MenuError, MenuResult};
use super::id::ItemIdGenerator;
use super::seed::seed_menu;
use crate::guest::MenuSnapshot;
use crate::stats::{MenuStats, derive_stats};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_PRICE, parse_course, parse_price, validate_required_text,
};
use rust_decimal::Decimal;
use shared::models::{MenuItem, MenuItemCreate};
use std::collections::HashSet;

/// Owned menu state. Construct one per session (or per test) and pass it to
/// whatever needs it; there is no global instance.
#[derive(Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    ids: ItemIdGenerator,
}

impl std::fmt::Debug for MenuStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuStore")
            .field("items_count", &self.items.len())
            .finish()
    }
}

impl MenuStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the seed menu
    pub fn seeded() -> Self {
        Self {
            items: seed_menu(),
            ids: ItemIdGenerator::new(),
        }
    }

    /// Store holding `items` in the given order.
    ///
    /// Fails if two items share an id or an item breaks the field rules
    /// (blank text, price not above zero or above [`MAX_PRICE`]).
    pub fn from_items(items: Vec<MenuItem>) -> MenuResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(MenuError::DuplicateId(item.id.clone()));
            }
            if item.id.trim().is_empty() {
                return Err(MenuError::validation("id", "Menu item id must not be empty"));
            }
            validate_required_text(&item.name, "name", MAX_NAME_LEN)?;
            validate_required_text(&item.description, "description", MAX_DESCRIPTION_LEN)?;
            if item.price <= Decimal::ZERO {
                return Err(MenuError::validation("price", "Please enter a valid price."));
            }
            if item.price > MAX_PRICE {
                return Err(MenuError::validation(
                    "price",
                    format!("Price must not exceed {MAX_PRICE}."),
                ));
            }
        }
        Ok(Self {
            items,
            ids: ItemIdGenerator::new(),
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current collection, insertion order
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Count an add form should be opened with (`item_count_at_creation`)
    pub fn next_item_count(&self) -> usize {
        self.items.len()
    }

    /// Per-course statistics over the current collection
    pub fn stats(&self) -> MenuStats {
        derive_stats(&self.items)
    }

    /// Read-only copy for the guest view; later edits do not reach it
    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot::new(&self.items)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate `input` and append it as a new item.
    ///
    /// On error the collection is untouched.
    pub fn add(&mut self, input: MenuItemCreate) -> MenuResult<MenuItem> {
        let item = match self.build_item(&input) {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(
                    field = e.field().unwrap_or_default(),
                    error = %e,
                    "Rejected menu item"
                );
                return Err(e);
            }
        };

        tracing::debug!(id = %item.id, course = %item.course, price = %item.price, "Menu item added");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the item with `id`, keeping the order of the rest.
    ///
    /// Returns `false` when no such item exists; calling it again for the
    /// same id is harmless.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let removed = self.items.remove(index);
                tracing::debug!(id = %removed.id, course = %removed.course, "Menu item removed");
                true
            }
            None => {
                tracing::debug!(id, "Menu item not found, nothing removed");
                false
            }
        }
    }

    fn build_item(&mut self, input: &MenuItemCreate) -> MenuResult<MenuItem> {
        let name = validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        let description =
            validate_required_text(&input.description, "description", MAX_DESCRIPTION_LEN)?;
        let price = parse_price(&input.price)?;
        let course = parse_course(&input.course)?;

        // Ids loaded through from_items may already use the generated layout
        let id = loop {
            let candidate = self.ids.next_id(input.item_count_at_creation);
            if self.get(&candidate).is_none() {
                break candidate;
            }
        };

        Ok(MenuItem {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            course,
        })
    }
}
