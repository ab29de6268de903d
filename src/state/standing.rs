//! Standings table row type.

/// One team's final totals, snapshotted out of the bracket for sorting and
/// rendering. Never mutated after creation.
///
/// The goal-difference value is always carried; whether it takes part in
/// ordering and output is decided per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// Team name, exactly as it appeared in the input.
    pub team: String,
    /// Accumulated points under the win/draw/loss rule.
    pub points: u32,
    /// Accumulated goal difference (may be negative).
    pub goal_difference: i64,
}

impl Standing {
    /// Build a row from a team's totals.
    #[must_use]
    pub fn new(team: impl Into<String>, points: u32, goal_difference: i64) -> Self {
        Self {
            team: team.into(),
            points,
            goal_difference,
        }
    }
}
