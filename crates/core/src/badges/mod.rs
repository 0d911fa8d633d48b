//! Badges module - catalog models, services, and traits.

mod badges_model;
mod badges_service;
mod badges_traits;

pub use badges_model::Badge;
pub use badges_service::BadgeService;
pub use badges_traits::{BadgeCatalogTrait, BadgeServiceTrait};
