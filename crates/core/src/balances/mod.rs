//! Balance snapshots - the append-only time series behind every account.

mod balances_model;
mod balances_traits;

pub use balances_model::{BalanceSnapshot, NewBalanceSnapshot};
pub use balances_traits::BalanceRepositoryTrait;
