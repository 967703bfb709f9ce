//! The internal timedtext endpoint and its caption XML schema: repeated
//! `<text start="..." dur="...">line</text>` elements.

use std::sync::LazyLock;

use anyhow::anyhow;
use regex::Regex;

use crate::error::CaptionError;
use crate::transcript::Segment;

pub const TIMEDTEXT_URL: &str = "https://video.google.com/timedtext";

static TEXT_NODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text([^>]*)>(.*?)</text>").unwrap());

static START_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"start="([0-9.]+)""#).unwrap());

pub async fn fetch_timedtext(
    client: &reqwest::Client,
    video_id: &str,
) -> Result<String, CaptionError> {
    let response = client
        .get(TIMEDTEXT_URL)
        .query(&[("lang", "en"), ("v", video_id)])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(CaptionError::Other(anyhow!(
            "timedtext endpoint returned {}",
            response.status()
        )));
    }

    Ok(response.text().await?)
}

/// Extracts caption lines from a timedtext document. Empty lines are
/// dropped; the five predefined XML entities are unescaped.
pub fn parse_caption_xml(xml: &str) -> Vec<Segment> {
    TEXT_NODE_RE
        .captures_iter(xml)
        .filter_map(|cap| {
            let text = unescape_entities(cap.get(2)?.as_str().trim());
            if text.is_empty() {
                return None;
            }
            let start = cap
                .get(1)
                .and_then(|attrs| START_ATTR_RE.captures(attrs.as_str()))
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse().ok());
            Some(Segment { text, start })
        })
        .collect()
}

fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
