//! Run orchestration: result lines in, ranked table out.

use std::io::BufRead;

use color_eyre::eyre::{Result, WrapErr};

use crate::cli::args::{Args, OutputFormat};
use crate::config::{Config, InvalidLinePolicy};
use crate::core::input::InputSource;
use crate::core::{parser, ranking};
use crate::state::bracket::Bracket;
use crate::state::standing::Standing;

// ── Settings ────────────────────────────────────────────────────────────────

/// Effective options for one run, after merging CLI flags over the config.
#[derive(Debug, Clone, Copy)]
pub struct RunSettings {
    /// Rank and render goal difference.
    pub goal_difference: bool,
    /// Policy for unparseable lines.
    pub on_invalid: InvalidLinePolicy,
    /// Output flavor.
    pub format: OutputFormat,
}

impl RunSettings {
    /// Merge CLI flags over file-backed configuration. Flags only tighten:
    /// `--points-only` turns goal difference off, `--lenient` turns
    /// skipping on.
    #[must_use]
    pub fn merge(args: &Args, config: &Config) -> Self {
        Self {
            goal_difference: config.table.goal_difference && !args.points_only,
            on_invalid: if args.lenient {
                InvalidLinePolicy::Skip
            } else {
                config.input.on_invalid
            },
            format: args.format,
        }
    }
}

// ── Entry point ─────────────────────────────────────────────────────────────

/// Execute one full run: load config, read input, print the table.
pub fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;
    let settings = RunSettings::merge(args, &config);
    let source = InputSource::resolve(args.input_file.as_deref());

    log::debug!(
        "reading results from {source} (goal difference: {}, on invalid: {:?}, format: {})",
        settings.goal_difference,
        settings.on_invalid,
        settings.format
    );

    let reader = source.open()?;
    let output = tabulate(reader, &settings)?;
    print!("{output}");
    Ok(())
}

// ── Pipeline ────────────────────────────────────────────────────────────────

/// Fold result lines into a bracket, then sort and render the table.
///
/// The whole pipeline behind [`run`], separated from process-level concerns
/// (argument parsing, stdout) so it can run against any reader.
pub fn tabulate(reader: impl BufRead, settings: &RunSettings) -> Result<String> {
    let bracket = ingest(reader, settings.on_invalid)?;
    log::debug!("{} teams on the table", bracket.len());

    let mut standings = bracket.snapshot();
    ranking::sort_standings(&mut standings, settings.goal_difference);

    match settings.format {
        OutputFormat::Text => Ok(ranking::render_table(&standings, settings.goal_difference)),
        OutputFormat::Json => render_json(&standings, settings.goal_difference),
    }
}

/// Read every line and fold the parseable ones into a fresh bracket.
///
/// Whitespace-only lines are never results and are always skipped. What
/// happens to an unparseable line depends on the policy: `Abort` fails the
/// run with the 1-based line number and the offending text, `Skip` logs a
/// warning and moves on.
fn ingest(reader: impl BufRead, on_invalid: InvalidLinePolicy) -> Result<Bracket> {
    let mut bracket = Bracket::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.wrap_err("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match parser::parse_line(&line) {
            Ok(result) => {
                log::debug!("line {}: {result:?}", index + 1);
                for (team, points, goal_difference) in result.awards() {
                    bracket.update(team, points, goal_difference);
                }
            }
            Err(err) => match on_invalid {
                InvalidLinePolicy::Abort => {
                    return Err(err)
                        .wrap_err_with(|| format!("cannot parse line {}: {line:?}", index + 1));
                }
                InvalidLinePolicy::Skip => {
                    log::warn!("skipping line {}: {err} ({line:?})", index + 1);
                }
            },
        }
    }

    Ok(bracket)
}

// ── Rendering ───────────────────────────────────────────────────────────────

/// Render sorted rows as a pretty-printed JSON array with the same order and
/// rank numbers as the text table.
fn render_json(standings: &[Standing], goal_difference: bool) -> Result<String> {
    let rows: Vec<serde_json::Value> = ranking::ranked(standings, goal_difference)
        .into_iter()
        .map(|(rank, standing)| {
            if goal_difference {
                serde_json::json!({
                    "rank": rank,
                    "team": standing.team,
                    "points": standing.points,
                    "goal_difference": standing.goal_difference,
                })
            } else {
                serde_json::json!({
                    "rank": rank,
                    "team": standing.team,
                    "points": standing.points,
                })
            }
        })
        .collect();

    let mut body = serde_json::to_string_pretty(&rows)?;
    body.push('\n');
    Ok(body)
}
