//! Matchbot Core - conversational query handling over a season of match
//! records.
//!
//! This crate provides:
//! - Dialog envelope types shared with the dialog manager (events in,
//!   elicit/close responses out)
//! - Slot-state extraction and required-slot gating
//! - Free-text match-date normalization to the dataset's day-month-year form
//! - The in-memory match dataset with its equality filters
//! - One handler per intent plus the total intent router
//! - Pluggable dataset acquisition (remote object store, in-memory fixture)

pub mod clients;
pub mod dates;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod slots;
pub mod types;

pub use error::HandlerError;
pub use handlers::QueryHandler;
pub use models::{MatchDataset, MatchRecord, TeamStats};
