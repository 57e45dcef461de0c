//! Query Handler Rust Service
//!
//! Fulfillment endpoint for the match query bot.
//!
//! This service:
//! - Receives one recognized-intent event (JSON on stdin) per invocation
//! - Fetches the season's match dataset from the object store
//! - Validates slots, eliciting the first missing one when underspecified
//! - Filters the dataset and formats the natural-language answer
//! - Writes the dialog response envelope (JSON) to stdout
//!
//! The dialog manager and the scheduling substrate that invokes this binary
//! are external; the contract is one event in, one envelope out.

use anyhow::Result;
use dotenv::dotenv;
use matchbot_rust_core::clients::ObjectStoreClient;
use matchbot_rust_core::providers::ObjectStoreProvider;
use query_handler_rust::config::ServiceConfig;
use query_handler_rust::fulfillment::fulfill;
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting query handler service...");

    let config = ServiceConfig::from_env();
    let client =
        ObjectStoreClient::with_timeout(&config.object_store_endpoint, config.http_timeout);
    let provider =
        ObjectStoreProvider::new(client, &config.dataset_bucket, &config.dataset_key);

    let mut raw_event = String::new();
    std::io::stdin().read_to_string(&mut raw_event)?;

    let response = fulfill(&provider, &config.season_label, &raw_event).await;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
