//! Menu Engine - in-memory restaurant menu state
//!
//! # Overview
//!
//! - **Menu store** (`menu`): the ordered item collection with validated add
//!   and idempotent remove
//! - **Statistics** (`stats`): per-course counts and average prices
//! - **Filter** (`filter`): course filtering for the guest menu
//! - **Guest view** (`guest`): snapshot taken when the guest menu opens
//!
//! Rendering, navigation and delete confirmation belong to the presentation
//! layer that owns a [`MenuStore`] and calls into it.
//!
//! # Layout
//!
//! ```text
//! menu-engine/src/
//! ├── core/          # config, environment setup
//! ├── menu/          # store, errors, ids, seed menu
//! ├── utils/         # logger, validation
//! ├── stats.rs
//! ├── filter.rs
//! └── guest.rs
//! ```
//!
//! # Example
//!
//! ```
//! use menu_engine::{MenuFilter, MenuStore, apply_filter};
//! use shared::models::MenuItemCreate;
//!
//! let mut store = MenuStore::seeded();
//! let count = store.next_item_count();
//! let soup = store
//!     .add(MenuItemCreate::new("Soup", "Tomato", "6.00", "Starters").with_item_count(count))
//!     .unwrap();
//!
//! let starters = apply_filter(store.list(), MenuFilter::Starters);
//! assert_eq!(starters.len(), 2);
//! assert_eq!(store.stats().starters.average_price.to_string(), "7.25");
//!
//! assert!(store.remove(&soup.id));
//! assert!(!store.remove(&soup.id));
//! ```

pub mod core;
pub mod filter;
pub mod guest;
pub mod menu;
pub mod stats;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, setup_environment};
pub use filter::{MenuFilter, apply_filter};
pub use guest::{GuestView, MenuSnapshot};
pub use menu::{MenuError, MenuResult, MenuStore};
pub use stats::{CourseStats, MenuStats, derive_stats};

pub fn print_banner() {
    println!(
        r#"
    __  ___
   /  |/  /__  ____  __  __
  / /|_/ / _ \/ __ \/ / / /
 / /  / /  __/ / / / /_/ /
/_/  /_/\___/_/ /_/\__,_/
    "#
    );
}
