use thiserror::Error;

/// Failure of a single caption-source operation. The fallback chain in
/// [`crate::transcript`] decides what each kind means for the request as a
/// whole.
#[derive(Debug, Error)]
pub enum CaptionError {
    #[error("no caption track found for the requested language")]
    NotFound,
    #[error("captions are disabled for this video")]
    Disabled,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for CaptionError {
    fn from(e: reqwest::Error) -> Self {
        CaptionError::Other(e.into())
    }
}

/// Transcript-layer outcome surfaced to the HTTP endpoint. Display strings
/// are exposed to clients in the 404 body, so they describe video
/// availability and nothing internal.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("No transcripts or captions available for video {video_id}.")]
    NoTranscriptAvailable { video_id: String },
    #[error("Transcripts are disabled for video {video_id} and no fallback captions were found.")]
    TranscriptsDisabled { video_id: String },
    #[error("Could not retrieve transcript for video {video_id}: {source}")]
    Retrieval {
        video_id: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Error talking to the generation service. Surfaced from the summarizer
/// after retries are exhausted; the translator swallows it instead.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Generation API error: {status} - {message}")]
    Api { status: u16, message: String },
}
