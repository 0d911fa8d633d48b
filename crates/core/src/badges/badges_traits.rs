use crate::badges::Badge;
use crate::errors::Result;

/// Trait for badge catalog lookups.
///
/// A missing catalog entry for a known milestone id is a data inconsistency,
/// but callers treat it as `Ok(None)` and degrade gracefully rather than
/// failing the completion flow.
pub trait BadgeCatalogTrait: Send + Sync {
    /// Resolves a badge by its milestone id. `Ok(None)` on catalog miss.
    fn resolve_badge(&self, milestone_id: &str) -> Result<Option<Badge>>;

    /// Lists the full badge catalog.
    fn list_badges(&self) -> Result<Vec<Badge>>;
}

/// Trait for badge service operations.
pub trait BadgeServiceTrait: Send + Sync {
    fn get_badge_catalog(&self) -> Result<Vec<Badge>>;
}
