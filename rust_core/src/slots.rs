//! Slot-state extraction and required-slot gating.
//!
//! The dialog manager delivers slots as a loosely-typed map with explicit
//! nulls for unfilled entries. This module collapses that into an explicit
//! state per slot, computed once, and provides the gating check handlers use
//! to decide whether enough information is present to proceed.

use crate::types::SlotMap;

pub const SLOT_TEAM_ONE: &str = "TeamOne";
pub const SLOT_TEAM_TWO: &str = "TeamTwo";
pub const SLOT_MATCH_DATE: &str = "MatchDate";
pub const SLOT_TEAM_NAME: &str = "TeamName";

pub const PROMPT_TEAM_ONE: &str = "Please provide the name of the first team.";
pub const PROMPT_TEAM_TWO: &str = "Please provide the name of the second team.";
pub const PROMPT_MATCH_DATE: &str = "Please provide the date of the match.";
pub const PROMPT_TEAM_NAME: &str = "Please provide the name of the team.";

/// State of a single slot. Absent keys, null entries, and whitespace-only
/// interpreted values all count as `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    Filled(String),
    Empty,
}

/// Directive to ask the user for a specific slot before continuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elicitation {
    pub slot_name: &'static str,
    pub prompt: &'static str,
}

pub fn slot_state(slots: &SlotMap, name: &str) -> SlotState {
    match slots.get(name) {
        Some(Some(slot)) => {
            let value = slot.value.interpreted_value.trim();
            if value.is_empty() {
                SlotState::Empty
            } else {
                SlotState::Filled(value.to_string())
            }
        }
        _ => SlotState::Empty,
    }
}

/// Returns the slot's interpreted value, or the elicitation directive the
/// caller must convert into an ElicitSlot response and return immediately.
pub fn require_slot(
    slots: &SlotMap,
    name: &'static str,
    prompt: &'static str,
) -> Result<String, Elicitation> {
    match slot_state(slots, name) {
        SlotState::Filled(value) => Ok(value),
        SlotState::Empty => Err(Elicitation {
            slot_name: name,
            prompt,
        }),
    }
}
