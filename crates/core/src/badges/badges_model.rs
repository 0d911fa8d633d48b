//! Badge catalog domain model.

use serde::{Deserialize, Serialize};

/// A persistent, user-visible achievement marker.
///
/// Catalog entries are seeded by migration and immutable at runtime. A badge
/// is resolved by its milestone id when a streak threshold is crossed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub milestone_id: String,
    pub name: String,
    pub description: Option<String>,
}
