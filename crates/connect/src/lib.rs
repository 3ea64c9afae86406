//! Finboard Connect - bank-data aggregation over the Plaid API.
//!
//! This crate implements [`finboard_core::provider::AggregationProviderTrait`]
//! with a `reqwest` client. Plaid's wire types stay private to the crate;
//! callers only see the core provider models.

mod client;
mod environment;
mod models;

pub use client::PlaidApiClient;
pub use environment::{ParseEnvironmentError, PlaidConfig, PlaidEnvironment};
