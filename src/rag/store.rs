use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    pub id: String,
    pub text: String,
    pub embedding: Vec<f32>,
}

impl EmbeddingRecord {
    pub fn new(text: String, embedding: Vec<f32>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            embedding,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingStore {
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub records: Vec<EmbeddingRecord>,
}

impl EmbeddingStore {
    pub fn new(model: String, records: Vec<EmbeddingRecord>) -> Self {
        Self {
            model,
            created_at: Utc::now(),
            records,
        }
    }

    /// Loads the store from disk. A missing file is not an error: the
    /// retriever degrades to an empty corpus.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            warn!("Embedding store not found at {}, starting empty", path.display());
            return Ok(Self::new(String::new(), Vec::new()));
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let store: Self = serde_json::from_str(&contents)?;

        debug!(
            "Loaded {} embedding records from {}",
            store.records.len(),
            path.display()
        );
        Ok(store)
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string(self)?;
        tokio::fs::write(path, contents).await?;

        debug!(
            "Saved {} embedding records to {}",
            self.records.len(),
            path.display()
        );
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
