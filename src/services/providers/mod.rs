/// LLM channel abstraction
///
/// The engine treats the model as an opaque text-completion function behind
/// this trait. A channel may be absent entirely (no API key configured) or
/// fail at call time; either way the engine degrades to its rule-based path.
use crate::error::AppResult;

pub mod groq;

/// Trait for text-completion backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LlmChannel: Send + Sync {
    /// Sends a prompt and returns the raw completion text
    async fn complete(&self, prompt: &str) -> AppResult<String>;

    /// Channel name for logging and debugging
    fn name(&self) -> &'static str;
}
