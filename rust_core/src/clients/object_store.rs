//! HTTP client for the object store holding the dataset file.
//!
//! Objects are addressed as `{endpoint}/{bucket}/{key}` and fetched
//! unauthenticated. One fetch per invocation, no retry: if the store is
//! unreachable the whole invocation fails with a fixed user-facing message.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ObjectStoreClient {
    client: Client,
    endpoint: String,
}

impl ObjectStoreClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint: endpoint.into(),
        }
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint.trim_end_matches('/'), bucket, key)
    }

    /// Fetch one object's bytes.
    pub async fn fetch_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let url = self.object_url(bucket, key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("object store request failed: {url}"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("object store returned {status} for {url}");
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("reading object body failed: {url}"))?;
        tracing::info!("fetched object {}/{} ({} bytes)", bucket, key, bytes.len());

        Ok(bytes.to_vec())
    }
}
