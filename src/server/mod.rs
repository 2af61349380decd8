pub mod handlers;
pub mod types;

use crate::{
    Result,
    assistant::Assistant,
    config::Config,
    llm::{EmbeddingsClient, OpenAiClient},
    rag::{EmbeddingStore, Retriever, ingest_faqs},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

pub fn router(state: handlers::AppState, frontend_dir: &str) -> Router {
    let mut app = Router::new()
        .route("/inquiry", post(handlers::inquiry))
        .route("/health", get(handlers::health))
        .with_state(state);

    // Serve the chat frontend when it is present
    if Path::new(frontend_dir).is_dir() {
        app = app.nest_service("/app", ServeDir::new(frontend_dir));
    } else {
        warn!("Frontend directory not found at {}", frontend_dir);
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    let embedder: Arc<dyn EmbeddingsClient> = Arc::new(OpenAiClient::new(config.llm.clone()));

    // Build the embedding store on first start, or when a rebuild is forced
    let rebuild = std::env::var("REBUILD_STORE").is_ok_and(|v| v == "1");
    if rebuild || !Path::new(&config.server.store_path).is_file() {
        match ingest_faqs(
            embedder.as_ref(),
            &config.llm.embedding_model,
            &config.server.faq_path,
            &config.server.store_path,
            config.retrieval.max_chunk_chars,
        )
        .await
        {
            Ok(count) => info!("FAQ ingestion complete: {} records", count),
            Err(e) => warn!("FAQ ingestion failed, serving without context: {}", e),
        }
    }

    let store = EmbeddingStore::load(&config.server.store_path).await?;
    let retriever = Retriever::new(embedder, store);

    let llm_client = Box::new(OpenAiClient::new(config.llm.clone()));
    let assistant = Assistant::new(llm_client, retriever, &config);

    let app_state = handlers::AppState {
        assistant: Arc::new(assistant),
    };

    let app = router(app_state, &config.server.frontend_dir);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
