use anyhow::anyhow;
use tube_digest::error::CaptionError;
use tube_digest::transcript::{CaptionSource, Segment, Track};

/// Caption source serving only a manual English track (if configured).
/// Everything else fails the way the live platform would for a video with
/// no other caption data.
#[derive(Default)]
pub struct MockCaptions {
    pub manual_en: Option<Vec<Segment>>,
}

impl MockCaptions {
    pub fn with_transcript(lines: &[&str]) -> Self {
        Self {
            manual_en: Some(
                lines
                    .iter()
                    .map(|t| Segment {
                        text: t.to_string(),
                        start: None,
                    })
                    .collect(),
            ),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl CaptionSource for MockCaptions {
    async fn fetch_track(
        &self,
        _video_id: &str,
        language: &str,
    ) -> Result<Vec<Segment>, CaptionError> {
        if language == "en" {
            self.manual_en.clone().ok_or(CaptionError::NotFound)
        } else {
            Err(CaptionError::NotFound)
        }
    }

    async fn list_tracks(&self, _video_id: &str) -> Result<Vec<Track>, CaptionError> {
        Ok(Vec::new())
    }

    async fn fetch_segments(&self, _track: &Track) -> Result<Vec<Segment>, CaptionError> {
        Err(CaptionError::NotFound)
    }

    async fn fetch_timedtext(&self, _video_id: &str) -> Result<String, CaptionError> {
        Err(CaptionError::Other(anyhow!(
            "timedtext endpoint returned 404 Not Found"
        )))
    }
}
