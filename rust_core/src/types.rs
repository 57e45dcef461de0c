//! Dialog envelope types shared with the dialog-management collaborator.
//!
//! The wire shapes are Lex-style JSON: an event carries a session state with
//! the recognized intent and its slots; a response carries either an
//! ElicitSlot directive (ask the user for one more slot) or a Close directive
//! with a terminal fulfillment state. Every response carries exactly one
//! plain-text message.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Slot name to slot state, as delivered by the dialog manager. Unfilled
/// slots arrive as explicit nulls.
pub type SlotMap = HashMap<String, Option<Slot>>;

/// Incoming fulfillment event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub session_state: SessionState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_action: Option<DialogAction>,
    pub intent: Intent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<SlotMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<IntentState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub value: SlotValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotValue {
    #[serde(default)]
    pub interpreted_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogAction {
    #[serde(rename = "type")]
    pub action_type: DialogActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_to_elicit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogActionType {
    ElicitSlot,
    Close,
}

/// Fulfillment state of the intent. `InProgress` is only valid alongside an
/// ElicitSlot action; Close actions carry one of the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentState {
    InProgress,
    Fulfilled,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    PlainText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

/// Outgoing response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_state: SessionState,
    pub messages: Vec<Message>,
}

impl DialogResponse {
    /// ElicitSlot response: ask for one more slot, echo the accumulated
    /// slots, keep the intent in progress.
    pub fn elicit_slot(
        intent_name: &str,
        slots: SlotMap,
        slot_to_elicit: &str,
        prompt: &str,
    ) -> Self {
        Self {
            session_state: SessionState {
                dialog_action: Some(DialogAction {
                    action_type: DialogActionType::ElicitSlot,
                    slot_to_elicit: Some(slot_to_elicit.to_string()),
                }),
                intent: Intent {
                    name: intent_name.to_string(),
                    slots: Some(slots),
                    state: Some(IntentState::InProgress),
                },
            },
            messages: vec![Message::plain_text(prompt)],
        }
    }

    /// Close response with a terminal fulfillment state.
    pub fn close(intent_name: &str, state: IntentState, message: &str) -> Self {
        debug_assert!(state != IntentState::InProgress);
        Self {
            session_state: SessionState {
                dialog_action: Some(DialogAction {
                    action_type: DialogActionType::Close,
                    slot_to_elicit: None,
                }),
                intent: Intent {
                    name: intent_name.to_string(),
                    slots: None,
                    state: Some(state),
                },
            },
            messages: vec![Message::plain_text(message)],
        }
    }
}
