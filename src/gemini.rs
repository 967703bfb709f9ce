//! Generation-service client. One client serves both roles: translation of
//! foreign transcripts (best-effort, no retry) and summarization (retried
//! with exponential backoff, typed error on exhaustion).

use std::future::Future;
use std::time::Duration;

use log::{error, warn};
use serde::Deserialize;
use serde_json::json;

use crate::config::GeminiConfig;
use crate::error::GenerationError;
use crate::retry::{AttemptError, RetryPolicy, retry_with_backoff};

pub trait Translator {
    /// Translate `text` into English. Never fails: on any trouble the
    /// implementation degrades to a placeholder string so the pipeline can
    /// still answer.
    fn translate(&self, text: &str, source_lang: &str) -> impl Future<Output = String>;
}

pub trait Summarizer {
    fn summarize(&self, transcript: &str)
    -> impl Future<Output = Result<String, GenerationError>>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    const SUMMARY_PROMPT: &str = "You are a concise summarization expert. Summarize the following \
        YouTube video transcript into 3-5 key bullet points capturing main topics and conclusions.";

    /// 5 attempts, 2 s initial delay, doubling: 2, 4, 8, 16.
    const RETRY_POLICY: RetryPolicy = RetryPolicy::new(5, Duration::from_secs(2), 2);

    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn send_generate_request(
        &self,
        system_prompt: &str,
        text: &str,
    ) -> Result<GenerateResponse, GenerationError> {
        let body = json!({
            "contents": [{"parts": [{"text": text}]}],
            "systemInstruction": {"parts": [{"text": system_prompt}]},
        });

        let resp = self
            .client
            .post(self.config.generate_url())
            .json(&body)
            .send()
            .await
            .inspect_err(|e| error!("Failed to reach generation service: {e}"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, message });
        }

        Ok(resp.json::<GenerateResponse>().await?)
    }
}

fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 503)
}

impl Translator for GeminiClient {
    async fn translate(&self, text: &str, source_lang: &str) -> String {
        let prompt = format!(
            "You are a professional translator. Translate the following text from {source_lang} to standard English."
        );

        match self.send_generate_request(&prompt, text).await {
            // Malformed success body: hand back the untranslated text.
            Ok(response) => response
                .first_text()
                .map(str::to_string)
                .unwrap_or_else(|| text.to_string()),
            Err(e) => {
                warn!("Translation from {source_lang} failed: {e}");
                format!("Translation failed: {e}")
            }
        }
    }
}

impl Summarizer for GeminiClient {
    async fn summarize(&self, transcript: &str) -> Result<String, GenerationError> {
        let response = retry_with_backoff(&Self::RETRY_POLICY, || async move {
            self.send_generate_request(Self::SUMMARY_PROMPT, transcript)
                .await
                .map_err(|e| match &e {
                    GenerationError::Api { status, .. } if is_retryable_status(*status) => {
                        warn!("Generation service returned {status}, will retry");
                        AttemptError::Retryable(e)
                    }
                    _ => AttemptError::Fatal(e),
                })
        })
        .await?;

        Ok(response
            .first_text()
            .map(str::to_string)
            .unwrap_or_else(|| "Summary failed.".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateResponse {
    /// First candidate's first text part, the only payload this service
    /// cares about.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.as_str())
    }
}
