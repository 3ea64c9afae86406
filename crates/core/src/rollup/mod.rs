//! Rollup engine.
//!
//! Turns per-account balances into asset, liability and net worth totals,
//! both for the current moment and as a daily history.

mod rollup_calculator;
mod rollup_model;
mod rollup_service;
mod rollup_traits;

pub use rollup_calculator::*;
pub use rollup_model::*;
pub use rollup_service::*;
pub use rollup_traits::*;

#[cfg(test)]
mod rollup_calculator_tests;

#[cfg(test)]
mod rollup_service_tests;
