use log::debug;
use std::sync::Arc;

use crate::badges::BadgeCatalogTrait;
use crate::errors::Result;
use crate::events::{DomainEvent, EventSink};
use crate::streaks::engine::apply_completion;
use crate::streaks::streaks_traits::StreakServiceTrait;
use crate::streaks::CompletionOutcome;
use crate::users::UserProgressRepositoryTrait;
use async_trait::async_trait;

/// Service wrapping the streak engine with persistence and event emission.
///
/// Load → apply → save, with no locking around the read-modify-write:
/// concurrent completions for the same user racing through separate
/// requests are last-write-wins, as in the original flow (see DESIGN.md).
pub struct StreakService {
    users: Arc<dyn UserProgressRepositoryTrait>,
    catalog: Arc<dyn BadgeCatalogTrait>,
    events: Arc<dyn EventSink>,
}

impl StreakService {
    pub fn new(
        users: Arc<dyn UserProgressRepositoryTrait>,
        catalog: Arc<dyn BadgeCatalogTrait>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        StreakService {
            users,
            catalog,
            events,
        }
    }
}

#[async_trait]
impl StreakServiceTrait for StreakService {
    async fn advance_streak(&self, user_id: &str) -> Result<CompletionOutcome> {
        let mut progress = self.users.get_progress(user_id)?;
        debug!(
            "Advancing streak for user {}: current streak {}",
            user_id, progress.streak_count
        );

        let outcome = apply_completion(&mut progress, self.catalog.as_ref())?;

        self.users
            .save_counters(user_id, progress.streak_count, progress.points)
            .await?;

        if let Some(badge) = &outcome.badge_awarded {
            self.users.award_badge(user_id, &badge.id).await?;
            self.events.emit(DomainEvent::badge_awarded(
                user_id.to_string(),
                badge.id.clone(),
            ));
        }

        self.events.emit(DomainEvent::streak_advanced(
            user_id.to_string(),
            outcome.new_streak,
            outcome.bonus_xp,
        ));

        Ok(outcome)
    }
}
