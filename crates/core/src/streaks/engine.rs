//! The streak & milestone engine.
//!
//! Pure decision logic invoked once per "goal completed today" event, after
//! the caller has confirmed the goal belongs to the user and has not already
//! been completed for the day. Performs no I/O beyond one catalog read; the
//! caller persists the mutated progress.

use log::warn;

use crate::badges::BadgeCatalogTrait;
use crate::errors::Result;
use crate::streaks::milestones::milestone_for;
use crate::streaks::CompletionOutcome;
use crate::users::UserProgress;

/// Applies one goal completion to the user's progress.
///
/// Increments the streak by exactly 1 on every call. This flow does not
/// reset the streak for missed calendar days; that is the literal behavior
/// of the completion path (the day-boundary check lives elsewhere) and is
/// deliberately preserved. Not idempotent: the caller gates at-most-once
/// per completion event.
///
/// When the new streak equals a milestone threshold exactly:
/// - the badge is resolved via the catalog and appended if the user does
///   not already have it; a catalog miss adds no badge and is not an error;
/// - the milestone's bonus XP is added whether or not the badge was newly
///   awarded.
pub fn apply_completion(
    progress: &mut UserProgress,
    catalog: &dyn BadgeCatalogTrait,
) -> Result<CompletionOutcome> {
    progress.streak_count += 1;
    let new_streak = progress.streak_count;

    let mut badge_awarded = None;
    let mut bonus_xp = 0;

    if let Some(milestone) = milestone_for(new_streak) {
        // Dedup keys on the resolved badge id, not the milestone id: the
        // seeded catalog uses identical ids, but nothing guarantees that.
        match catalog.resolve_badge(milestone.milestone_id)? {
            Some(badge) if !progress.has_badge(&badge.id) => {
                progress.badge_ids.push(badge.id.clone());
                badge_awarded = Some(badge);
            }
            Some(_) => {}
            None => warn!(
                "No catalog badge resolves milestone '{}'",
                milestone.milestone_id
            ),
        }

        if milestone.bonus_xp > 0 {
            progress.points += milestone.bonus_xp;
            bonus_xp = milestone.bonus_xp;
        }
    }

    Ok(CompletionOutcome {
        new_streak,
        badge_awarded,
        bonus_xp,
    })
}
