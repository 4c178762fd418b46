//! Menu state: the store, its errors, item ids and the seed menu.

mod error;
mod id;
mod seed;
mod store;

pub use error::{MenuError, MenuResult};
pub use id::ItemIdGenerator;
pub use seed::seed_menu;
pub use store::MenuStore;
