use serde::{Deserialize, Serialize};

/// Tunable match rules. Loaded from content alongside the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchRules {
    pub target_score: i64,
    pub milestone_step: i64,
}

impl MatchRules {
    pub fn standard() -> Self {
        Self {
            target_score: 100,
            milestone_step: 20,
        }
    }

    /// Milestone level for a banked score: score // step, floored at 0.
    pub fn milestone_for(&self, score: i64) -> i64 {
        if self.milestone_step <= 0 {
            return 0;
        }
        (score / self.milestone_step).max(0)
    }
}
