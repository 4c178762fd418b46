//! Data models
//!
//! Shared between the menu engine and whatever presentation layer drives it.

pub mod course;
pub mod menu_item;

// Re-exports
pub use course::*;
pub use menu_item::*;
