use rust_decimal::Decimal;

use crate::constants::MATERIAL_CHANGE_THRESHOLD;

/// True when a delta is large enough to record. The threshold itself is not.
pub fn is_material_change(delta: Decimal) -> bool {
    delta.abs() > MATERIAL_CHANGE_THRESHOLD
}

/// Compares a freshly fetched balance with the last stored one.
///
/// Returns the signed delta when it is material. An account with no stored
/// snapshot is compared against zero.
pub fn detect_change(previous: Option<Decimal>, fetched: Decimal) -> Option<Decimal> {
    let delta = fetched - previous.unwrap_or(Decimal::ZERO);
    is_material_change(delta).then_some(delta)
}
