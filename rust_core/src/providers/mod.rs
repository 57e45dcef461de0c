//! Dataset acquisition behind a provider trait.
//!
//! The handler never talks to the object store directly; it is handed a
//! `DatasetProvider` so the acquisition source can be swapped — the real
//! store in the service, an in-memory fixture in tests.

use async_trait::async_trait;

use crate::clients::ObjectStoreClient;
use crate::error::HandlerError;
use crate::models::MatchDataset;

#[async_trait]
pub trait DatasetProvider: Send + Sync {
    /// Acquire a fresh copy of the dataset for one invocation.
    async fn fetch_dataset(&self) -> Result<MatchDataset, HandlerError>;

    /// Provider name for logging and debugging.
    fn provider_name(&self) -> &str;
}

/// Fetches the dataset CSV from the remote object store.
pub struct ObjectStoreProvider {
    client: ObjectStoreClient,
    bucket: String,
    key: String,
}

impl ObjectStoreProvider {
    pub fn new(client: ObjectStoreClient, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

#[async_trait]
impl DatasetProvider for ObjectStoreProvider {
    async fn fetch_dataset(&self) -> Result<MatchDataset, HandlerError> {
        let bytes = self
            .client
            .fetch_object(&self.bucket, &self.key)
            .await
            .map_err(|e| HandlerError::DatasetUnavailable(format!("{e:#}")))?;
        MatchDataset::from_csv(&bytes)
    }

    fn provider_name(&self) -> &str {
        "object_store"
    }
}

/// Serves a dataset held in memory. The substitution point for tests.
pub struct FixtureProvider {
    dataset: MatchDataset,
}

impl FixtureProvider {
    pub fn new(dataset: MatchDataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl DatasetProvider for FixtureProvider {
    async fn fetch_dataset(&self) -> Result<MatchDataset, HandlerError> {
        Ok(self.dataset.clone())
    }

    fn provider_name(&self) -> &str {
        "fixture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchRecord;

    fn make_record(team1: &str, team2: &str) -> MatchRecord {
        MatchRecord {
            team1: team1.to_string(),
            team2: team2.to_string(),
            date: "15-04-2019".to_string(),
            venue: "Wankhede Stadium".to_string(),
            city: "Mumbai".to_string(),
            winner: team1.to_string(),
            win_by_runs: 12,
            win_by_wickets: 0,
            dl_applied: false,
            toss_winner: team2.to_string(),
            toss_decision: "field".to_string(),
            player_of_match: "R Sharma".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fixture_provider_serves_its_dataset() {
        let provider = FixtureProvider::new(MatchDataset::new(vec![make_record(
            "Mumbai Indians",
            "Chennai Super Kings",
        )]));

        let dataset = provider.fetch_dataset().await.unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(provider.provider_name(), "fixture");
    }

    #[tokio::test]
    async fn test_object_store_provider_reports_unreachable_store() {
        // Nothing listens on this port; the fetch must come back as a typed
        // acquisition failure, not a panic.
        let client = ObjectStoreClient::new("http://127.0.0.1:1");
        let provider = ObjectStoreProvider::new(client, "iplmatch2019", "ipl_matches_2019.csv");

        match provider.fetch_dataset().await {
            Err(HandlerError::DatasetUnavailable(_)) => {}
            other => panic!("expected DatasetUnavailable, got {other:?}"),
        }
    }
}
