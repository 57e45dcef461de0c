//! Failure kinds for the query handler.
//!
//! Every kind carries its internal detail for logging and maps to a fixed
//! user-facing message. The detail is never placed in a dialog response.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    /// The dataset object could not be fetched or parsed.
    #[error("dataset unavailable: {0}")]
    DatasetUnavailable(String),

    /// The MatchDate slot value did not parse as a calendar date.
    #[error("unparseable match date: '{0}'")]
    UnparseableDate(String),

    /// The event named an intent this service does not fulfill.
    #[error("unrecognized intent: '{0}'")]
    UnrecognizedIntent(String),

    /// The incoming event did not match the expected envelope shape.
    #[error("malformed dialog event: {0}")]
    MalformedEvent(String),
}

impl HandlerError {
    /// Fixed message shown to the end user for this failure kind.
    pub fn user_message(&self) -> &'static str {
        match self {
            HandlerError::DatasetUnavailable(_) => {
                "Sorry, the match data is unavailable right now. Please try again later."
            }
            HandlerError::UnparseableDate(_) => {
                "Sorry, I couldn't understand the match date you provided."
            }
            HandlerError::UnrecognizedIntent(_) => "Sorry, I am not able to handle that request.",
            HandlerError::MalformedEvent(_) => {
                "Sorry, something went wrong while handling your request."
            }
        }
    }
}
