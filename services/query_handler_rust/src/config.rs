//! Configuration constants and environment loading for the query handler.
//!
//! This module manages all runtime configuration:
//! - Object store coordinates for the dataset file
//! - HTTP timeout for the fetch
//! - Season label used in the TeamStats answer

use std::env;
use std::time::Duration;

/// Default object store endpoint (public HTTP access, no credentials).
pub const DEFAULT_OBJECT_STORE_ENDPOINT: &str = "https://s3.amazonaws.com";

/// Default bucket holding the dataset file.
pub const DEFAULT_DATASET_BUCKET: &str = "iplmatch2019";

/// Default object key of the dataset file.
pub const DEFAULT_DATASET_KEY: &str = "ipl_matches_2019.csv";

/// Default season label substituted into the TeamStats answer.
pub const DEFAULT_SEASON_LABEL: &str = "IPL 2019";

/// Default timeout for the dataset fetch in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for one service invocation.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub object_store_endpoint: String,
    pub dataset_bucket: String,
    pub dataset_key: String,
    pub season_label: String,
    pub http_timeout: Duration,
}

impl ServiceConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let object_store_endpoint = env::var("OBJECT_STORE_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_OBJECT_STORE_ENDPOINT.to_string());

        let dataset_bucket =
            env::var("DATASET_BUCKET").unwrap_or_else(|_| DEFAULT_DATASET_BUCKET.to_string());

        let dataset_key =
            env::var("DATASET_KEY").unwrap_or_else(|_| DEFAULT_DATASET_KEY.to_string());

        let season_label =
            env::var("SEASON_LABEL").unwrap_or_else(|_| DEFAULT_SEASON_LABEL.to_string());

        let http_timeout = Duration::from_secs(
            env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        );

        Self {
            object_store_endpoint,
            dataset_bucket,
            dataset_key,
            season_label,
            http_timeout,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            object_store_endpoint: DEFAULT_OBJECT_STORE_ENDPOINT.to_string(),
            dataset_bucket: DEFAULT_DATASET_BUCKET.to_string(),
            dataset_key: DEFAULT_DATASET_KEY.to_string(),
            season_label: DEFAULT_SEASON_LABEL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
