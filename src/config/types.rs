use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub scope: ScopeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default = "default_faq_path")]
    pub faq_path: String,
    #[serde(default = "default_store_path")]
    pub store_path: String,
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeConfig {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_tokens() -> u16 {
    220
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_faq_path() -> String {
    "data/faqs.md".to_string()
}

fn default_store_path() -> String {
    "data/store.json".to_string()
}

fn default_frontend_dir() -> String {
    "frontend".to_string()
}

fn default_top_k() -> usize {
    4
}

fn default_max_chunk_chars() -> usize {
    900
}

fn default_keywords() -> Vec<String> {
    crate::assistant::scope::DEFAULT_KEYWORDS
        .iter()
        .map(|k| k.to_string())
        .collect()
}
