//! Transcript acquisition: an ordered fallback chain over a caption source.
//!
//! Order of attempts: manual English track, auto-generated English track,
//! first non-English track (translated), raw timedtext scrape. A "captions
//! disabled" signal at any structured step redirects straight to the scrape
//! instead of failing the request.

pub mod captions;
pub mod timedtext;

use std::future::Future;

use crate::error::{CaptionError, TranscriptError};
use crate::gemini::Translator;

/// Pseudo language code for the auto-generated English track.
pub const AUTO_ENGLISH: &str = "a.en";

/// One caption line as sourced from a track. Timing metadata is dropped once
/// lines are joined.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub start: Option<f64>,
}

/// One available caption track for a video.
#[derive(Debug, Clone)]
pub struct Track {
    pub language_code: String,
    /// Human-readable language name, e.g. "French".
    pub language: String,
    pub auto_generated: bool,
    pub base_url: String,
}

/// Seam to the caption-hosting platform. [`captions::YouTubeCaptions`] is
/// the real implementation; tests substitute their own.
pub trait CaptionSource {
    /// Fetch the track for `language`, where [`AUTO_ENGLISH`] selects the
    /// auto-generated English track and anything else a manual track.
    fn fetch_track(
        &self,
        video_id: &str,
        language: &str,
    ) -> impl Future<Output = Result<Vec<Segment>, CaptionError>>;

    /// Enumerate every caption track the video offers.
    fn list_tracks(&self, video_id: &str)
    -> impl Future<Output = Result<Vec<Track>, CaptionError>>;

    /// Fetch the segments of a specific track from [`CaptionSource::list_tracks`].
    fn fetch_segments(
        &self,
        track: &Track,
    ) -> impl Future<Output = Result<Vec<Segment>, CaptionError>>;

    /// Raw body of the internal timedtext endpoint for `video_id` (`lang=en`).
    fn fetch_timedtext(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<String, CaptionError>>;
}

/// Runs the fallback chain and returns the transcript as a single
/// space-joined string.
pub async fn fetch_transcript(
    source: &impl CaptionSource,
    translator: &impl Translator,
    video_id: &str,
) -> Result<String, TranscriptError> {
    // 1. Manual English track.
    match source.fetch_track(video_id, "en").await {
        Ok(segments) => return Ok(join_segments(&segments)),
        Err(CaptionError::NotFound) => {}
        Err(CaptionError::Disabled) => return scrape_timedtext(source, video_id, true).await,
        Err(CaptionError::Other(e)) => return Err(retrieval_error(video_id, e)),
    }

    // 2. Auto-generated English track.
    match source.fetch_track(video_id, AUTO_ENGLISH).await {
        Ok(segments) => return Ok(join_segments(&segments)),
        Err(CaptionError::NotFound) => {}
        Err(CaptionError::Disabled) => return scrape_timedtext(source, video_id, true).await,
        Err(CaptionError::Other(e)) => return Err(retrieval_error(video_id, e)),
    }

    // 3. First non-English track, translated to English.
    let tracks = match source.list_tracks(video_id).await {
        Ok(tracks) => tracks,
        Err(CaptionError::NotFound) => Vec::new(),
        Err(CaptionError::Disabled) => return scrape_timedtext(source, video_id, true).await,
        Err(CaptionError::Other(e)) => return Err(retrieval_error(video_id, e)),
    };
    if let Some(track) = tracks.iter().find(|t| t.language_code != "en") {
        let segments = match source.fetch_segments(track).await {
            Ok(segments) => segments,
            Err(CaptionError::Disabled) => return scrape_timedtext(source, video_id, true).await,
            Err(CaptionError::NotFound) => {
                return scrape_timedtext(source, video_id, false).await;
            }
            Err(CaptionError::Other(e)) => return Err(retrieval_error(video_id, e)),
        };
        return Ok(translator
            .translate(&join_segments(&segments), &track.language)
            .await);
    }

    // 4. Nothing usable from the structured API at all.
    scrape_timedtext(source, video_id, false).await
}

/// Final fallback: the internal timedtext endpoint. `captions_disabled`
/// records how we got here, so exhaustion reports the right condition.
async fn scrape_timedtext(
    source: &impl CaptionSource,
    video_id: &str,
    captions_disabled: bool,
) -> Result<String, TranscriptError> {
    let lines = match source.fetch_timedtext(video_id).await {
        Ok(body) => timedtext::parse_caption_xml(&body),
        Err(e) => {
            log::debug!("Timedtext scrape failed for {video_id}: {e}");
            Vec::new()
        }
    };

    if lines.is_empty() {
        if captions_disabled {
            Err(TranscriptError::TranscriptsDisabled {
                video_id: video_id.to_string(),
            })
        } else {
            Err(TranscriptError::NoTranscriptAvailable {
                video_id: video_id.to_string(),
            })
        }
    } else {
        Ok(join_segments(&lines))
    }
}

fn join_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn retrieval_error(video_id: &str, source: anyhow::Error) -> TranscriptError {
    TranscriptError::Retrieval {
        video_id: video_id.to_string(),
        source,
    }
}
