//! Remote document store seam and clients

use crate::config::{StoreConfig, STORE_TOKEN_ENV};
use crate::error::StoreError;
use async_trait::async_trait;
use parking_lot::Mutex;
use sightline_core::JournalEntry;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Append-only document sink for journal entries. No read path exists.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist one entry. The store assigns its own server-side timestamp;
    /// the entry's client-side timestamp travels in the document body.
    async fn append(&self, entry: &JournalEntry) -> Result<(), StoreError>;

    /// Get store name
    fn name(&self) -> &str;
}

/// HTTPS document-collection client with bounded retry.
pub struct HttpDocumentStore {
    client: reqwest::Client,
    config: StoreConfig,
    api_token: Option<String>,
}

impl HttpDocumentStore {
    /// Create a new store client from config. The bearer token comes from
    /// the config or, failing that, the `SIGHTLINE_STORE_TOKEN` environment
    /// variable.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        config.validate().map_err(StoreError::Config)?;

        let api_token = config
            .api_token
            .clone()
            .or_else(|| std::env::var(STORE_TOKEN_ENV).ok());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config,
            api_token,
        })
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.collection
        )
    }

    async fn try_append(&self, entry: &JournalEntry) -> Result<(), StoreError> {
        let body = serde_json::json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "text": entry.text,
            "client_time": entry.timestamp,
        });

        let mut request = self.client.post(self.collection_url()).json(&body);
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::Rejected { status, body });
        }

        Ok(())
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn append(&self, entry: &JournalEntry) -> Result<(), StoreError> {
        let retry = &self.config.retry;
        let mut delay = Duration::from_millis(retry.initial_delay_ms);
        let max_delay = Duration::from_millis(retry.max_delay_ms);

        let mut last_err = None;
        for attempt in 0..=retry.max_retries {
            match self.try_append(entry).await {
                Ok(()) => {
                    debug!("Journal entry persisted to {}", self.config.collection);
                    return Ok(());
                }
                Err(e) => {
                    warn!(
                        "Store write failed (attempt {}/{}): {}",
                        attempt + 1,
                        retry.max_retries + 1,
                        e
                    );
                    last_err = Some(e);
                    if attempt < retry.max_retries {
                        tokio::time::sleep(delay).await;
                        delay = (delay * 2).min(max_delay);
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| StoreError::Request("No attempts made".to_string())))
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// In-memory store for tests and offline runs.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<Mutex<Vec<JournalEntry>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended so far, in write order.
    pub fn documents(&self) -> Vec<JournalEntry> {
        self.documents.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.lock().is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn append(&self, entry: &JournalEntry) -> Result<(), StoreError> {
        self.documents.lock().push(entry.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
