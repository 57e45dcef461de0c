//! Per-invocation fulfillment pipeline.
//!
//! Parse the event, acquire the dataset through the injected provider, route
//! the intent, and always come back with a well-formed response envelope —
//! a malformed event or an unreachable store degrades to Close/Failed with a
//! fixed message, never a raw fault.

use matchbot_rust_core::providers::DatasetProvider;
use matchbot_rust_core::types::{DialogEvent, DialogResponse};
use matchbot_rust_core::{HandlerError, QueryHandler};
use tracing::{error, info};

/// Intent name used in the response envelope when the event is too malformed
/// to carry one.
const UNKNOWN_INTENT_NAME: &str = "Unknown";

pub async fn fulfill(
    provider: &dyn DatasetProvider,
    season_label: &str,
    raw_event: &str,
) -> DialogResponse {
    let event: DialogEvent = match serde_json::from_str(raw_event) {
        Ok(event) => event,
        Err(e) => {
            error!("failed to parse dialog event: {e}");
            return QueryHandler::failure_response(
                UNKNOWN_INTENT_NAME,
                &HandlerError::MalformedEvent(e.to_string()),
            );
        }
    };

    let intent_name = event.session_state.intent.name.clone();
    if let Some(session_id) = &event.session_id {
        info!("session {session_id}: intent '{intent_name}'");
    }

    let dataset = match provider.fetch_dataset().await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(
                "dataset acquisition via '{}' failed: {e}",
                provider.provider_name()
            );
            return QueryHandler::failure_response(&intent_name, &e);
        }
    };
    info!(
        "dataset acquired via '{}': {} rows",
        provider.provider_name(),
        dataset.len()
    );

    QueryHandler::new(dataset, season_label).handle(&event)
}
