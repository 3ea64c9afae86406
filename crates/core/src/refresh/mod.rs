//! Balance refresh - change detection and notification.

mod change_detection;
mod refresh_model;
mod refresh_service;

pub use change_detection::{detect_change, is_material_change};
pub use refresh_model::RefreshSummary;
pub use refresh_service::{RefreshService, RefreshServiceTrait};
