mod chunker;
mod ingest;
mod retriever;
mod store;

pub use chunker::{chunk_markdown, clean_text};
pub use ingest::ingest_faqs;
pub use retriever::{Retriever, Snippet, build_context_snippets, cosine_similarity};
pub use store::{EmbeddingRecord, EmbeddingStore};
