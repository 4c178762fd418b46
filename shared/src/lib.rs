//! Shared types for the restaurant menu workspace
//!
//! Domain models, the unified error system and small time/id helpers used by
//! the menu engine and any presentation layer built on top of it.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, ErrorCode};
pub use models::{Course, MenuItem, MenuItemCreate};
pub use serde::{Deserialize, Serialize};
