use std::sync::{Arc, Mutex};

use tube_digest::error::GenerationError;
use tube_digest::gemini::{Summarizer, Translator};

/// Generation-service stand-in. Records summarize calls; fails them when no
/// canned summary is configured.
#[derive(Clone)]
pub struct MockGemini {
    pub summary: Option<String>,
    pub summarize_calls: Arc<Mutex<Vec<String>>>,
}

impl MockGemini {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: Some(summary.to_string()),
            summarize_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            summary: None,
            summarize_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Translator for MockGemini {
    async fn translate(&self, text: &str, _source_lang: &str) -> String {
        format!("[en] {text}")
    }
}

impl Summarizer for MockGemini {
    async fn summarize(&self, transcript: &str) -> Result<String, GenerationError> {
        self.summarize_calls
            .lock()
            .unwrap()
            .push(transcript.to_string());
        match &self.summary {
            Some(summary) => Ok(summary.clone()),
            None => Err(GenerationError::Api {
                status: 400,
                message: "invalid request".to_string(),
            }),
        }
    }
}
