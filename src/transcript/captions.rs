//! Real caption source: lists a video's caption tracks from the embedded
//! player response of its watch page and fetches track contents.

use std::sync::LazyLock;

use anyhow::anyhow;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CaptionError;
use crate::transcript::{AUTO_ENGLISH, CaptionSource, Segment, Track, timedtext};

const WATCH_URL: &str = "https://www.youtube.com/watch";

static PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});(?:\s*var\s|\s*</script>)")
        .unwrap()
});

/// Caption track entry as it appears in the player response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCaptionTrack {
    base_url: String,
    language_code: String,
    /// "asr" marks an auto-generated track.
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    name: Option<TrackName>,
}

#[derive(Debug, Deserialize)]
struct TrackName {
    #[serde(rename = "simpleText", default)]
    simple_text: Option<String>,
    #[serde(default)]
    runs: Option<Vec<NameRun>>,
}

#[derive(Debug, Deserialize)]
struct NameRun {
    text: String,
}

impl RawCaptionTrack {
    fn language_name(&self) -> String {
        self.name
            .as_ref()
            .and_then(|n| {
                n.simple_text
                    .clone()
                    .or_else(|| n.runs.as_ref().and_then(|r| r.first()).map(|r| r.text.clone()))
            })
            .unwrap_or_else(|| self.language_code.clone())
    }
}

pub struct YouTubeCaptions {
    client: reqwest::Client,
}

impl Default for YouTubeCaptions {
    fn default() -> Self {
        Self::new()
    }
}

impl YouTubeCaptions {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn watch_page(&self, video_id: &str) -> Result<String, CaptionError> {
        let response = self
            .client
            .get(WATCH_URL)
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CaptionError::Other(anyhow!(
                "watch page returned {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

/// Pulls the `captionTracks` array out of a watch-page document.
///
/// A playable page without any caption data means the uploader disabled
/// captions; a page we cannot parse at all is an upstream failure.
fn parse_caption_tracks(html: &str) -> Result<Vec<RawCaptionTrack>, CaptionError> {
    let player_response: Value = PLAYER_RESPONSE_RE
        .captures(html)
        .and_then(|cap| cap.get(1))
        .and_then(|m| serde_json::from_str(m.as_str()).ok())
        .ok_or_else(|| {
            CaptionError::Other(anyhow!(
                "failed to extract ytInitialPlayerResponse from the watch page, structure might have changed"
            ))
        })?;

    let tracks = &player_response["captions"]["playerCaptionsTracklistRenderer"]["captionTracks"];
    let Some(tracks) = tracks.as_array() else {
        return Err(CaptionError::Disabled);
    };

    serde_json::from_value(Value::Array(tracks.clone()))
        .map_err(|e| CaptionError::Other(anyhow!("malformed captionTracks entry: {e}")))
}

impl CaptionSource for YouTubeCaptions {
    async fn fetch_track(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<Vec<Segment>, CaptionError> {
        let tracks = self.list_tracks(video_id).await?;
        let track = match language {
            AUTO_ENGLISH => tracks
                .into_iter()
                .find(|t| t.language_code == "en" && t.auto_generated),
            lang => tracks
                .into_iter()
                .find(|t| t.language_code == lang && !t.auto_generated),
        };

        match track {
            Some(track) => self.fetch_segments(&track).await,
            None => Err(CaptionError::NotFound),
        }
    }

    async fn list_tracks(&self, video_id: &str) -> Result<Vec<Track>, CaptionError> {
        let html = self.watch_page(video_id).await?;
        let raw = parse_caption_tracks(&html)?;

        Ok(raw
            .into_iter()
            .map(|t| Track {
                language: t.language_name(),
                auto_generated: t.kind.as_deref() == Some("asr"),
                language_code: t.language_code,
                base_url: t.base_url,
            })
            .collect())
    }

    async fn fetch_segments(&self, track: &Track) -> Result<Vec<Segment>, CaptionError> {
        let response = self.client.get(&track.base_url).send().await?;

        if !response.status().is_success() {
            return Err(CaptionError::Other(anyhow!(
                "caption track endpoint returned {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        Ok(timedtext::parse_caption_xml(&body))
    }

    async fn fetch_timedtext(&self, video_id: &str) -> Result<String, CaptionError> {
        timedtext::fetch_timedtext(&self.client, video_id).await
    }
}
