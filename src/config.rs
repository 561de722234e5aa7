use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Groq API key; when absent the engine runs rule-based only
    #[serde(default)]
    pub groq_api_key: Option<String>,

    /// Groq API base URL
    #[serde(default = "default_groq_api_url")]
    pub groq_api_url: String,

    /// Chat model used for analysis and recommendation prompts
    #[serde(default = "default_groq_model")]
    pub groq_model: String,

    /// Default cap on recommendations returned per request
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
}

fn default_groq_api_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_groq_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_max_recommendations() -> usize {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
