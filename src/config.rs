use anyhow::{Context, Result};

/// Read-only generation-service configuration, built once at startup and
/// passed by reference into the components that need it.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: String,
}

impl GeminiConfig {
    pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string());
        let api_base =
            std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| Self::DEFAULT_API_BASE.to_string());

        Ok(Self {
            api_base,
            model,
            api_key,
        })
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        )
    }
}
