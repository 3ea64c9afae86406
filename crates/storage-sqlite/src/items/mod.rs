//! SQLite storage implementation for link items.

mod model;
mod repository;

pub use model::LinkItemDB;
pub use repository::LinkItemRepository;
