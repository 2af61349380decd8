use super::chunker::{chunk_markdown, clean_text};
use super::store::{EmbeddingRecord, EmbeddingStore};
use crate::{Error, Result, llm::EmbeddingsClient};
use std::path::Path;
use tracing::info;

/// Chunks the FAQ corpus, embeds every chunk, and writes the store to disk.
/// Returns the number of records written.
pub async fn ingest_faqs(
    embedder: &dyn EmbeddingsClient,
    embedding_model: &str,
    faq_path: impl AsRef<Path>,
    store_path: impl AsRef<Path>,
    max_chunk_chars: usize,
) -> Result<usize> {
    let faq_path = faq_path.as_ref();
    if !faq_path.is_file() {
        return Err(Error::FaqNotFound {
            path: faq_path.display().to_string(),
        });
    }

    let md = tokio::fs::read_to_string(faq_path).await?;
    let chunks: Vec<String> = chunk_markdown(&md, max_chunk_chars)
        .into_iter()
        .map(|c| clean_text(&c))
        .filter(|c| !c.is_empty())
        .collect();

    info!(
        "Ingesting {} FAQ chunks from {}",
        chunks.len(),
        faq_path.display()
    );

    let embeddings = embedder.embed(chunks.clone()).await?;
    if embeddings.len() != chunks.len() {
        return Err(Error::retrieval(format!(
            "Expected {} embeddings, got {}",
            chunks.len(),
            embeddings.len()
        )));
    }

    let records: Vec<EmbeddingRecord> = chunks
        .into_iter()
        .zip(embeddings)
        .map(|(text, embedding)| EmbeddingRecord::new(text, embedding))
        .collect();

    let count = records.len();
    let store = EmbeddingStore::new(embedding_model.to_string(), records);
    store.save(store_path.as_ref()).await?;

    info!(
        "Wrote {} embedding records to {}",
        count,
        store_path.as_ref().display()
    );
    Ok(count)
}
