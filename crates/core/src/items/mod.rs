//! Link items - one authorized connection to a financial institution.

mod items_model;
mod items_service;
mod items_traits;


pub use items_model::{LinkItem, LinkedItem, NewLinkItem};
pub use items_service::LinkService;
pub use items_traits::{LinkItemRepositoryTrait, LinkServiceTrait};
