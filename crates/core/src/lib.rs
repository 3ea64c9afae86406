//! Finboard Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the balance dashboard: account
//! and balance models, the rollup engine, the refresh cycle and the
//! notification payloads. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite`, `connect` and `notify` crates.

pub mod accounts;
pub mod balances;
pub mod constants;
pub mod errors;
pub mod items;
pub mod notifications;
pub mod provider;
pub mod refresh;
pub mod rollup;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
