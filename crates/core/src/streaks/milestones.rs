//! Compiled-in streak milestone table.

/// A configured streak threshold that triggers a one-time badge and/or
/// bonus points the first time it is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    /// Streak length that triggers this milestone (exact equality).
    pub threshold: i32,
    /// Milestone id used to resolve the badge in the catalog.
    pub milestone_id: &'static str,
    /// One-time XP payout when the threshold is reached.
    pub bonus_xp: i64,
}

/// The milestone table, ordered by strictly increasing threshold.
///
/// A streak count matches at most one entry at the moment it is first
/// reached; there is no greater-or-equal accumulation across entries.
pub const MILESTONES: &[Milestone] = &[
    Milestone {
        threshold: 7,
        milestone_id: "badge-7day",
        bonus_xp: 50,
    },
    Milestone {
        threshold: 30,
        milestone_id: "badge-30day",
        bonus_xp: 200,
    },
    Milestone {
        threshold: 100,
        milestone_id: "badge-100day",
        bonus_xp: 500,
    },
    Milestone {
        threshold: 365,
        milestone_id: "badge-365day",
        bonus_xp: 2000,
    },
];

/// Returns the milestone whose threshold equals `streak` exactly, if any.
pub fn milestone_for(streak: i32) -> Option<&'static Milestone> {
    MILESTONES.iter().find(|m| m.threshold == streak)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_strictly_increasing() {
        for pair in MILESTONES.windows(2) {
            assert!(
                pair[0].threshold < pair[1].threshold,
                "milestone thresholds must be strictly increasing: {} >= {}",
                pair[0].threshold,
                pair[1].threshold
            );
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(milestone_for(7).map(|m| m.milestone_id), Some("badge-7day"));
        assert!(milestone_for(8).is_none());
        assert!(milestone_for(6).is_none());
        assert!(milestone_for(0).is_none());
        assert!(milestone_for(-1).is_none());
    }

    #[test]
    fn test_payouts_positive() {
        for milestone in MILESTONES {
            assert!(milestone.bonus_xp > 0);
            assert!(milestone.threshold > 0);
        }
    }
}
