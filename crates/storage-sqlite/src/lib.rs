//! SQLite storage implementation for Finboard.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `finboard-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for link items, accounts and balance snapshots
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!  storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod balances;
pub mod items;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use accounts::AccountRepository;
pub use balances::BalanceRepository;
pub use items::LinkItemRepository;

// Re-export from finboard-core for convenience
pub use finboard_core::errors::{DatabaseError, Error, Result};

#[cfg(test)]
pub(crate) mod test_support;
