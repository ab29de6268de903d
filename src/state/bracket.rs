//! Bracket accumulator: per-team running totals for one ranking run.

use std::collections::HashMap;

use crate::state::standing::Standing;

/// A team's running totals while results are folded in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TeamRecord {
    points: u32,
    goal_difference: i64,
}

/// Accumulates points and goal difference per team.
///
/// Keys are exact team-name strings: totals merge only when the same
/// spelling (case- and whitespace-sensitive) appears again. The map carries
/// no order; callers sort the snapshot.
#[derive(Debug, Default)]
pub struct Bracket {
    records: HashMap<String, TeamRecord>,
}

impl Bracket {
    /// Create an empty bracket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one team's deltas from a single match.
    ///
    /// Inserts a fresh record on the first mention of `team`; afterwards the
    /// deltas add onto the stored totals. Points only ever grow (a loss adds
    /// zero); goal difference moves either way.
    pub fn update(&mut self, team: &str, points: u32, goal_difference: i64) {
        let record = self.records.entry(team.to_string()).or_default();
        record.points += points;
        record.goal_difference += goal_difference;
    }

    /// Snapshot every team seen so far, one row each, in no particular order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Standing> {
        self.records
            .iter()
            .map(|(team, record)| {
                Standing::new(team.clone(), record.points, record.goal_difference)
            })
            .collect()
    }

    /// Number of distinct teams seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True until the first update arrives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
