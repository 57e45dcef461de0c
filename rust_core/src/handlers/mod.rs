//! Intent handlers and the intent router.
//!
//! Each handler validates its required slots in a fixed priority order,
//! filters the dataset, and produces an [`Outcome`]. The router owns the
//! single place where outcomes become wire responses, so the envelope
//! invariants (one message per response, slots echoed on elicitation,
//! terminal state on Close) live here and nowhere else.

pub mod match_scoped;
pub mod team_stats;

use crate::error::HandlerError;
use crate::models::MatchDataset;
use crate::slots::Elicitation;
use crate::types::{DialogEvent, DialogResponse, IntentState, SlotMap};

pub const MSG_MATCH_NOT_FOUND: &str = "Sorry, I couldn't find details for the specified match.";
pub const MSG_TEAM_NOT_FOUND: &str = "Sorry, I couldn't find stats for the specified team.";

/// The intents this service fulfills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    MatchDetails,
    TeamStats,
    PlayerOfTheMatch,
    TossDetails,
}

impl IntentKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "MatchDetails" => Some(IntentKind::MatchDetails),
            "TeamStats" => Some(IntentKind::TeamStats),
            "PlayerOfTheMatch" => Some(IntentKind::PlayerOfTheMatch),
            "TossDetails" => Some(IntentKind::TossDetails),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::MatchDetails => "MatchDetails",
            IntentKind::TeamStats => "TeamStats",
            IntentKind::PlayerOfTheMatch => "PlayerOfTheMatch",
            IntentKind::TossDetails => "TossDetails",
        }
    }
}

/// Result of running one intent handler.
#[derive(Debug)]
pub enum Outcome {
    /// A required slot is missing; ask the user for it.
    Elicit {
        slot_name: &'static str,
        prompt: &'static str,
    },
    /// The request was answered (including "not found" answers).
    Fulfilled(String),
    /// The request cannot be answered. The kind's fixed message is shown to
    /// the user; the detail is only logged.
    Failed(HandlerError),
}

impl From<Elicitation> for Outcome {
    fn from(e: Elicitation) -> Self {
        Outcome::Elicit {
            slot_name: e.slot_name,
            prompt: e.prompt,
        }
    }
}

impl From<HandlerError> for Outcome {
    fn from(e: HandlerError) -> Self {
        Outcome::Failed(e)
    }
}

/// Stateless per-invocation query handler: holds the freshly acquired
/// dataset and the season label used in the TeamStats answer.
pub struct QueryHandler {
    dataset: MatchDataset,
    season_label: String,
}

impl QueryHandler {
    pub fn new(dataset: MatchDataset, season_label: impl Into<String>) -> Self {
        Self {
            dataset,
            season_label: season_label.into(),
        }
    }

    /// Dispatch the event's intent and convert the outcome into a wire
    /// response. Total over intent names: unrecognized names get the fixed
    /// fallback, never an uncaught fault.
    pub fn handle(&self, event: &DialogEvent) -> DialogResponse {
        let intent = &event.session_state.intent;
        let slots = intent.slots.clone().unwrap_or_default();

        tracing::info!(
            "handling intent '{}' with {} slot entries",
            intent.name,
            slots.len()
        );

        let outcome = match IntentKind::from_name(&intent.name) {
            Some(IntentKind::MatchDetails) => match_scoped::match_details(&self.dataset, &slots),
            Some(IntentKind::PlayerOfTheMatch) => {
                match_scoped::player_of_the_match(&self.dataset, &slots)
            }
            Some(IntentKind::TossDetails) => match_scoped::toss_details(&self.dataset, &slots),
            Some(IntentKind::TeamStats) => {
                team_stats::team_stats(&self.dataset, &slots, &self.season_label)
            }
            None => Outcome::Failed(HandlerError::UnrecognizedIntent(intent.name.clone())),
        };

        Self::respond(&intent.name, slots, outcome)
    }

    fn respond(intent_name: &str, slots: SlotMap, outcome: Outcome) -> DialogResponse {
        match outcome {
            Outcome::Elicit { slot_name, prompt } => {
                tracing::debug!("eliciting slot '{}' for intent '{}'", slot_name, intent_name);
                DialogResponse::elicit_slot(intent_name, slots, slot_name, prompt)
            }
            Outcome::Fulfilled(message) => {
                DialogResponse::close(intent_name, IntentState::Fulfilled, &message)
            }
            Outcome::Failed(error) => Self::failure_response(intent_name, &error),
        }
    }

    /// Close/Failed envelope for a failure kind. The internal detail is
    /// logged here; the user sees the kind's fixed message only.
    pub fn failure_response(intent_name: &str, error: &HandlerError) -> DialogResponse {
        tracing::error!("intent '{}' failed: {}", intent_name, error);
        DialogResponse::close(intent_name, IntentState::Failed, error.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchRecord;
    use crate::types::{Intent, SessionState, Slot, SlotValue};

    pub(crate) fn make_record(
        team1: &str,
        team2: &str,
        date: &str,
        winner: &str,
    ) -> MatchRecord {
        MatchRecord {
            team1: team1.to_string(),
            team2: team2.to_string(),
            date: date.to_string(),
            venue: "Wankhede Stadium".to_string(),
            city: "Mumbai".to_string(),
            winner: winner.to_string(),
            win_by_runs: 0,
            win_by_wickets: 0,
            dl_applied: false,
            toss_winner: team1.to_string(),
            toss_decision: "bat".to_string(),
            player_of_match: "R Sharma".to_string(),
        }
    }

    pub(crate) fn make_slots(entries: &[(&str, &str)]) -> SlotMap {
        entries
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    Some(Slot {
                        value: SlotValue {
                            interpreted_value: value.to_string(),
                        },
                    }),
                )
            })
            .collect()
    }

    fn make_event(intent_name: &str, slots: SlotMap) -> DialogEvent {
        DialogEvent {
            session_id: Some("test-session".to_string()),
            session_state: SessionState {
                dialog_action: None,
                intent: Intent {
                    name: intent_name.to_string(),
                    slots: Some(slots),
                    state: None,
                },
            },
        }
    }

    fn fixture_handler() -> QueryHandler {
        let dataset = MatchDataset::new(vec![make_record(
            "Mumbai Indians",
            "Chennai Super Kings",
            "15-04-2019",
            "Mumbai Indians",
        )]);
        QueryHandler::new(dataset, "IPL 2019")
    }

    #[test]
    fn test_intent_kind_round_trips() {
        for name in ["MatchDetails", "TeamStats", "PlayerOfTheMatch", "TossDetails"] {
            assert_eq!(IntentKind::from_name(name).unwrap().as_str(), name);
        }
        assert!(IntentKind::from_name("BookFlights").is_none());
    }

    #[test]
    fn test_unrecognized_intent_gets_fixed_fallback() {
        let handler = fixture_handler();
        let event = make_event("BookFlights", SlotMap::new());

        let response = handler.handle(&event);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["sessionState"]["dialogAction"]["type"], "Close");
        assert_eq!(value["sessionState"]["intent"]["state"], "Failed");
        assert_eq!(
            value["messages"][0]["content"],
            "Sorry, I am not able to handle that request."
        );
    }

    #[test]
    fn test_elicitation_echoes_accumulated_slots() {
        let handler = fixture_handler();
        let slots = make_slots(&[("TeamOne", "Mumbai Indians")]);
        let event = make_event("MatchDetails", slots);

        let response = handler.handle(&event);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["sessionState"]["dialogAction"]["slotToElicit"], "TeamTwo");
        assert_eq!(value["sessionState"]["intent"]["state"], "InProgress");
        assert_eq!(
            value["sessionState"]["intent"]["slots"]["TeamOne"]["value"]["interpretedValue"],
            "Mumbai Indians"
        );
    }

    #[test]
    fn test_missing_slots_map_treated_as_all_empty() {
        let handler = fixture_handler();
        let mut event = make_event("TeamStats", SlotMap::new());
        event.session_state.intent.slots = None;

        let response = handler.handle(&event);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["sessionState"]["dialogAction"]["type"], "ElicitSlot");
        assert_eq!(value["sessionState"]["dialogAction"]["slotToElicit"], "TeamName");
    }

    #[test]
    fn test_failure_response_hides_internal_detail() {
        let error = HandlerError::DatasetUnavailable("GET http://10.0.0.1 timed out".to_string());
        let response = QueryHandler::failure_response("MatchDetails", &error);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["sessionState"]["intent"]["state"], "Failed");
        let message = value["messages"][0]["content"].as_str().unwrap();
        assert!(!message.contains("10.0.0.1"));
        assert_eq!(
            message,
            "Sorry, the match data is unavailable right now. Please try again later."
        );
    }

    #[test]
    fn test_every_response_carries_exactly_one_message() {
        let handler = fixture_handler();
        let events = vec![
            make_event("MatchDetails", SlotMap::new()),
            make_event(
                "MatchDetails",
                make_slots(&[
                    ("TeamOne", "Mumbai Indians"),
                    ("TeamTwo", "Chennai Super Kings"),
                    ("MatchDate", "15 April 2019"),
                ]),
            ),
            make_event("TeamStats", make_slots(&[("TeamName", "Mumbai Indians")])),
            make_event("SomethingElse", SlotMap::new()),
        ];

        for event in events {
            let response = handler.handle(&event);
            assert_eq!(response.messages.len(), 1);
        }
    }
}
