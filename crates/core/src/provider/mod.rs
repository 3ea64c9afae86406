//! Aggregation provider contract.
//!
//! The provider owns bank linking and balance retrieval. Concrete clients live
//! in the `connect` crate; services in this crate only see the trait.

mod provider_model;
mod provider_traits;

pub use provider_model::{ExchangedToken, InstitutionInfo, LinkToken, ProviderAccount};
pub use provider_traits::AggregationProviderTrait;
