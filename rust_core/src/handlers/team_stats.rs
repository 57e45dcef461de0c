//! TeamStats handler: season win/loss totals for one team.

use super::{Outcome, MSG_TEAM_NOT_FOUND};
use crate::models::MatchDataset;
use crate::slots::{require_slot, PROMPT_TEAM_NAME, SLOT_TEAM_NAME};
use crate::types::SlotMap;

/// Counts every row where the team appears on either side, so the filter is
/// order independent, unlike the match-scoped lookups.
pub fn team_stats(dataset: &MatchDataset, slots: &SlotMap, season_label: &str) -> Outcome {
    let team = match require_slot(slots, SLOT_TEAM_NAME, PROMPT_TEAM_NAME) {
        Ok(team) => team,
        Err(elicitation) => return elicitation.into(),
    };

    let message = match dataset.team_stats(&team) {
        Some(stats) => format!(
            "{} played {} matches, won {} and lost {} in {}.",
            team, stats.played, stats.won, stats.lost, season_label
        ),
        None => MSG_TEAM_NOT_FOUND.to_string(),
    };

    Outcome::Fulfilled(message)
}
