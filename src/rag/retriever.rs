use super::store::EmbeddingStore;
use crate::{Result, llm::EmbeddingsClient};
use std::sync::Arc;
use tracing::debug;

/// One retrieved FAQ chunk with its similarity score.
#[derive(Debug, Clone)]
pub struct Snippet {
    pub text: String,
    pub score: f32,
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    let denom = norm_a * norm_b;
    if denom <= 1e-9 {
        return 0.0;
    }
    dot / denom
}

pub struct Retriever {
    embedder: Arc<dyn EmbeddingsClient>,
    store: EmbeddingStore,
}

impl Retriever {
    pub fn new(embedder: Arc<dyn EmbeddingsClient>, store: EmbeddingStore) -> Self {
        Self { embedder, store }
    }

    /// Returns the `k` chunks closest to the query, best first. An empty
    /// store yields an empty result, not an error.
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<Snippet>> {
        if self.store.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self
            .embedder
            .embed(vec![query.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| crate::Error::retrieval("Embeddings response was empty"))?;

        let mut scored: Vec<Snippet> = self
            .store
            .records
            .iter()
            .map(|rec| Snippet {
                text: rec.text.clone(),
                score: cosine_similarity(&query_embedding, &rec.embedding),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(k);

        debug!("Retrieved {} snippets for query", scored.len());
        Ok(scored)
    }
}

/// Builds the numbered context block handed to the LLM plus the short
/// citation tags echoed back to the client.
pub fn build_context_snippets(snippets: &[Snippet]) -> (String, Vec<String>) {
    let mut cites = Vec::new();
    let mut lines = Vec::new();

    for (i, snippet) in snippets.iter().enumerate() {
        let tag = format!("[{}]", i + 1);
        let first_line = snippet.text.lines().next().unwrap_or("");
        let heading: String = first_line.chars().take(80).collect();
        cites.push(format!("{} {}", tag, heading.trim()));
        lines.push(format!("{} {}", tag, snippet.text));
    }

    (lines.join("\n\n"), cites)
}
