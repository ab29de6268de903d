//! Result-line parsing and the win/draw scoring rule.
//!
//! One input line describes one played match:
//!
//! ```text
//! <home team words> <home score>, <away team words> <away score>
//! ```
//!
//! Team names may contain internal whitespace; the last whitespace-delimited
//! token on each side of the comma is that side's score.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::constants::{DRAW_POINTS, LOSS_POINTS, WIN_POINTS};

// ── Errors ──────────────────────────────────────────────────────────────────

/// Which side of the comma a per-half failure occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

/// Failure to turn one input line into a match result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not split into exactly two comma-separated halves.
    #[error("expected exactly one comma between the two teams")]
    MalformedLine,
    /// A half has fewer than two whitespace tokens (team and score).
    #[error("{side} side needs a team name followed by a score")]
    MissingScoreOrTeam { side: Side },
    /// The trailing token of a half is not a non-negative integer.
    #[error("{side} side score {token:?} is not a valid non-negative integer")]
    InvalidScore { side: Side, token: String },
    /// The tokens before the score join to an empty team name.
    #[error("{side} side team name is empty")]
    EmptyTeamName { side: Side },
}

// ── Match results ───────────────────────────────────────────────────────────

/// One parsed match: two team names and their goal counts.
///
/// Ephemeral — produced per line, folded into the bracket, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub home_team: String,
    pub home_score: u32,
    pub away_team: String,
    pub away_score: u32,
}

impl MatchResult {
    /// Per-team (name, points, goal difference) deltas under the
    /// win(3)/draw(1)/loss(0) rule.
    ///
    /// Goal difference is own score minus opponent score regardless of the
    /// outcome, so the two entries' deltas always cancel out.
    #[must_use]
    pub fn awards(&self) -> [(&str, u32, i64); 2] {
        let home_gd = i64::from(self.home_score) - i64::from(self.away_score);
        let (home_points, away_points) = match self.home_score.cmp(&self.away_score) {
            Ordering::Greater => (WIN_POINTS, LOSS_POINTS),
            Ordering::Less => (LOSS_POINTS, WIN_POINTS),
            Ordering::Equal => (DRAW_POINTS, DRAW_POINTS),
        };
        [
            (self.home_team.as_str(), home_points, home_gd),
            (self.away_team.as_str(), away_points, -home_gd),
        ]
    }
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// Parse one result line into a [`MatchResult`].
pub fn parse_line(line: &str) -> Result<MatchResult, ParseError> {
    let mut halves = line.split(',');
    let (home, away) = match (halves.next(), halves.next(), halves.next()) {
        (Some(home), Some(away), None) => (home, away),
        _ => return Err(ParseError::MalformedLine),
    };

    let (home_team, home_score) = parse_side(home, Side::Home)?;
    let (away_team, away_score) = parse_side(away, Side::Away)?;

    Ok(MatchResult {
        home_team,
        home_score,
        away_team,
        away_score,
    })
}

/// Split one comma half into its team name and score.
fn parse_side(half: &str, side: Side) -> Result<(String, u32), ParseError> {
    let tokens: Vec<&str> = half.split_whitespace().collect();
    let Some((score_token, name_tokens)) = tokens.split_last() else {
        return Err(ParseError::MissingScoreOrTeam { side });
    };
    if name_tokens.is_empty() {
        return Err(ParseError::MissingScoreOrTeam { side });
    }

    let score = score_token
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidScore {
            side,
            token: (*score_token).to_string(),
        })?;

    let team = name_tokens.join(" ");
    if team.is_empty() {
        return Err(ParseError::EmptyTeamName { side });
    }

    Ok((team, score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let result = parse_line("Tarantulas 1, FC Awesome 0").unwrap();
        assert_eq!(result.home_team, "Tarantulas");
        assert_eq!(result.home_score, 1);
        assert_eq!(result.away_team, "FC Awesome");
        assert_eq!(result.away_score, 0);
    }

    #[test]
    fn test_parse_multiword_names() {
        let result = parse_line("Real Sociedad B 2, FC St. Pauli II 2").unwrap();
        assert_eq!(result.home_team, "Real Sociedad B");
        assert_eq!(result.away_team, "FC St. Pauli II");
    }

    #[test]
    fn test_parse_collapses_surrounding_whitespace() {
        let result = parse_line("  FC   Awesome   3 ,\tSnakes 1  ").unwrap();
        assert_eq!(result.home_team, "FC Awesome");
        assert_eq!(result.home_score, 3);
        assert_eq!(result.away_team, "Snakes");
        assert_eq!(result.away_score, 1);
    }

    #[test]
    fn test_parse_missing_comma() {
        assert_eq!(
            parse_line("Lions 3 Snakes 3"),
            Err(ParseError::MalformedLine)
        );
    }

    #[test]
    fn test_parse_too_many_commas() {
        assert_eq!(
            parse_line("Lions 3, Snakes 3, Grouches 0"),
            Err(ParseError::MalformedLine)
        );
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_line(""), Err(ParseError::MalformedLine));
    }

    #[test]
    fn test_parse_half_with_one_token() {
        assert_eq!(
            parse_line("Lions, Snakes 3"),
            Err(ParseError::MissingScoreOrTeam { side: Side::Home })
        );
        assert_eq!(
            parse_line("Lions 3, Snakes"),
            Err(ParseError::MissingScoreOrTeam { side: Side::Away })
        );
    }

    #[test]
    fn test_parse_empty_half() {
        assert_eq!(
            parse_line("Lions 3,"),
            Err(ParseError::MissingScoreOrTeam { side: Side::Away })
        );
    }

    #[test]
    fn test_parse_invalid_score() {
        assert_eq!(
            parse_line("Lions three, Snakes 3"),
            Err(ParseError::InvalidScore {
                side: Side::Home,
                token: "three".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_negative_score_rejected() {
        assert_eq!(
            parse_line("Lions 3, Snakes -1"),
            Err(ParseError::InvalidScore {
                side: Side::Away,
                token: "-1".to_string(),
            })
        );
    }

    #[test]
    fn test_awards_home_win() {
        let result = parse_line("Lions 4, Grouches 0").unwrap();
        assert_eq!(result.awards(), [("Lions", 3, 4), ("Grouches", 0, -4)]);
    }

    #[test]
    fn test_awards_away_win() {
        let result = parse_line("Snakes 1, Tarantulas 3").unwrap();
        assert_eq!(result.awards(), [("Snakes", 0, -2), ("Tarantulas", 3, 2)]);
    }

    #[test]
    fn test_awards_draw() {
        let result = parse_line("Lions 3, Snakes 3").unwrap();
        assert_eq!(result.awards(), [("Lions", 1, 0), ("Snakes", 1, 0)]);
    }

    #[test]
    fn test_awards_goal_difference_cancels_out() {
        let result = parse_line("Spurs 5, Grouches 2").unwrap();
        let [home, away] = result.awards();
        assert_eq!(home.2, 3);
        assert_eq!(home.2 + away.2, 0);
    }

    #[test]
    fn test_error_messages_name_the_side() {
        let err = parse_line("Lions x, Snakes 3").unwrap_err();
        assert!(err.to_string().contains("home"));
        let err = parse_line("Lions 3, Snakes x").unwrap_err();
        assert!(err.to_string().contains("away"));
    }
}
