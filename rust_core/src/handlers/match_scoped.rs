//! Handlers for the match-scoped intents: MatchDetails, PlayerOfTheMatch,
//! and TossDetails. All three validate the same three slots in the same
//! order and select a row with the same order-sensitive filter; they differ
//! only in which columns they read and how they phrase the answer.

use super::{Outcome, MSG_MATCH_NOT_FOUND};
use crate::dates::normalize_match_date;
use crate::models::{MatchDataset, MatchRecord};
use crate::slots::{
    require_slot, PROMPT_MATCH_DATE, PROMPT_TEAM_ONE, PROMPT_TEAM_TWO, SLOT_MATCH_DATE,
    SLOT_TEAM_ONE, SLOT_TEAM_TWO,
};
use crate::types::SlotMap;

/// Validated slot values plus the row they select. `match_date` keeps the
/// user's own phrasing; answers echo it back as given.
struct MatchQuery<'a> {
    team_one: String,
    team_two: String,
    match_date: String,
    row: Option<&'a MatchRecord>,
}

/// Checks TeamOne, TeamTwo, MatchDate in priority order, normalizes the
/// date, and selects the first matching row. The filter keeps the slots'
/// team assignment as given: a match recorded with the teams swapped is not
/// found.
fn lookup<'a>(dataset: &'a MatchDataset, slots: &SlotMap) -> Result<MatchQuery<'a>, Outcome> {
    let team_one = require_slot(slots, SLOT_TEAM_ONE, PROMPT_TEAM_ONE)?;
    let team_two = require_slot(slots, SLOT_TEAM_TWO, PROMPT_TEAM_TWO)?;
    let match_date = require_slot(slots, SLOT_MATCH_DATE, PROMPT_MATCH_DATE)?;

    let normalized = normalize_match_date(&match_date)?;
    let row = dataset.find_match(&team_one, &team_two, &normalized);
    if row.is_none() {
        tracing::debug!(
            "no row for {} vs {} on {}",
            team_one,
            team_two,
            normalized
        );
    }

    Ok(MatchQuery {
        team_one,
        team_two,
        match_date,
        row,
    })
}

pub fn match_details(dataset: &MatchDataset, slots: &SlotMap) -> Outcome {
    let query = match lookup(dataset, slots) {
        Ok(query) => query,
        Err(outcome) => return outcome,
    };

    let message = match query.row {
        Some(row) => {
            let mut msg = format!(
                "The match between {} and {} on {} at {} in {} was won by {}.",
                query.team_one, query.team_two, query.match_date, row.venue, row.city, row.winner
            );
            if row.win_by_runs > 0 {
                msg.push_str(&format!(" {} won by {} runs.", row.winner, row.win_by_runs));
            }
            if row.win_by_wickets > 0 {
                msg.push_str(&format!(
                    " {} won by {} wickets.",
                    row.winner, row.win_by_wickets
                ));
            }
            if row.dl_applied {
                msg.push_str(" (DL applied).");
            }
            msg.push_str(&format!(" Player of the match: {}.", row.player_of_match));
            msg
        }
        None => MSG_MATCH_NOT_FOUND.to_string(),
    };

    Outcome::Fulfilled(message)
}

pub fn player_of_the_match(dataset: &MatchDataset, slots: &SlotMap) -> Outcome {
    let query = match lookup(dataset, slots) {
        Ok(query) => query,
        Err(outcome) => return outcome,
    };

    let message = match query.row {
        Some(row) => format!(
            "The player of the match for the match between {} and {} on {} at {} in {} was {}.",
            query.team_one, query.team_two, query.match_date, row.venue, row.city,
            row.player_of_match
        ),
        None => MSG_MATCH_NOT_FOUND.to_string(),
    };

    Outcome::Fulfilled(message)
}

pub fn toss_details(dataset: &MatchDataset, slots: &SlotMap) -> Outcome {
    let query = match lookup(dataset, slots) {
        Ok(query) => query,
        Err(outcome) => return outcome,
    };

    let message = match query.row {
        Some(row) => format!(
            "The toss for the match between {} and {} on {} at {} was won by {}, and they decided to {}.",
            query.team_one, query.team_two, query.match_date, row.venue, row.toss_winner,
            row.toss_decision
        ),
        None => MSG_MATCH_NOT_FOUND.to_string(),
    };

    Outcome::Fulfilled(message)
}
