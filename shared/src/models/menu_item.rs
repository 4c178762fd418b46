//! Menu Item Model

use super::Course;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Immutable once stored; the store replaces or removes items wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique within the collection, never reused
    pub id: String,
    pub name: String,
    pub description: String,
    /// Always > 0, two decimal places
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub course: Course,
}

impl MenuItem {
    /// Price as shown on the menu, e.g. `$8.50`
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Create menu item payload
///
/// Carries the form input as typed: `price` and `course` are raw text and
/// only become a [`MenuItem`] after validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: String,
    pub course: String,
    /// Collection size the form was opened with; feeds the generated id
    #[serde(default)]
    pub item_count_at_creation: usize,
}

impl MenuItemCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            course: course.into(),
            item_count_at_creation: 0,
        }
    }

    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count_at_creation = count;
        self
    }
}
