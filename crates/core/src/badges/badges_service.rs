use std::sync::Arc;

use crate::badges::badges_traits::{BadgeCatalogTrait, BadgeServiceTrait};
use crate::badges::Badge;
use crate::errors::Result;

pub struct BadgeService {
    catalog: Arc<dyn BadgeCatalogTrait>,
}

impl BadgeService {
    pub fn new(catalog: Arc<dyn BadgeCatalogTrait>) -> Self {
        BadgeService { catalog }
    }
}

impl BadgeServiceTrait for BadgeService {
    fn get_badge_catalog(&self) -> Result<Vec<Badge>> {
        self.catalog.list_badges()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticCatalog {
        badges: Vec<Badge>,
    }

    impl BadgeCatalogTrait for StaticCatalog {
        fn resolve_badge(&self, milestone_id: &str) -> Result<Option<Badge>> {
            Ok(self
                .badges
                .iter()
                .find(|b| b.milestone_id == milestone_id)
                .cloned())
        }

        fn list_badges(&self) -> Result<Vec<Badge>> {
            Ok(self.badges.clone())
        }
    }

    fn badge(id: &str, milestone_id: &str) -> Badge {
        Badge {
            id: id.to_string(),
            milestone_id: milestone_id.to_string(),
            name: id.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_get_badge_catalog_lists_all_badges() {
        let catalog = Arc::new(StaticCatalog {
            badges: vec![badge("badge-7day", "badge-7day"), badge("badge-30day", "badge-30day")],
        });
        let service = BadgeService::new(catalog);

        let listed = service.get_badge_catalog().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "badge-7day");
        assert_eq!(listed[1].id, "badge-30day");
    }
}
