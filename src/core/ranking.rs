//! Standings ordering and table rendering.
//!
//! The sort key is points descending, then goal difference descending (only
//! when tracked), then team name ascending in byte order. Rank numbers use
//! standard competition ("1224") numbering: tied rows share the lower rank
//! and the next distinct row jumps to its 1-based position.

use std::cmp::Ordering;
use std::fmt::Write as _;

use crate::state::standing::Standing;

/// Sort rows into final table order.
///
/// `goal_difference` switches the middle comparator on or off; names always
/// break the remaining ties, so the order is total and never depends on how
/// the rows arrived.
pub fn sort_standings(standings: &mut [Standing], goal_difference: bool) {
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| {
                if goal_difference {
                    b.goal_difference.cmp(&a.goal_difference)
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| a.team.cmp(&b.team))
    });
}

/// Walk sorted rows and attach competition ranks.
///
/// Expects input already ordered by [`sort_standings`] with the same
/// `goal_difference` value. A row shares the previous row's rank iff its
/// full comparison key matches; otherwise its rank is its 1-based position.
#[must_use]
pub fn ranked(standings: &[Standing], goal_difference: bool) -> Vec<(usize, &Standing)> {
    let mut rows = Vec::with_capacity(standings.len());
    let mut rank = 0;
    let mut prev: Option<&Standing> = None;

    for (position, standing) in standings.iter().enumerate() {
        let tied = prev.is_some_and(|p| {
            p.points == standing.points
                && (!goal_difference || p.goal_difference == standing.goal_difference)
        });
        if !tied {
            rank = position + 1;
        }
        rows.push((rank, standing));
        prev = Some(standing);
    }

    rows
}

/// Render sorted rows as the final text table, one line per team.
///
/// Each row reads `"<rank>. <team>, <points> <pt|pts>"`, with `", gd: <gd>"`
/// appended when goal difference is tracked. The unit is singular exactly
/// when that row's points equal 1. Empty input renders to an empty string;
/// otherwise the output ends with a single trailing newline.
#[must_use]
pub fn render_table(standings: &[Standing], goal_difference: bool) -> String {
    let mut table = String::with_capacity(standings.len() * 32);

    for (rank, standing) in ranked(standings, goal_difference) {
        let unit = if standing.points == 1 { "pt" } else { "pts" };
        let _ = write!(
            table,
            "{rank}. {}, {} {unit}",
            standing.team, standing.points
        );
        if goal_difference {
            let _ = write!(table, ", gd: {}", standing.goal_difference);
        }
        table.push('\n');
    }

    table
}
