use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static SHORTLINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([A-Za-z0-9_-]{11})").unwrap());

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap());

/// Extract an 11-character YouTube video id from a watch URL or a
/// `youtu.be` shortlink. Returns `None` when neither form matches.
pub fn extract_video_id(raw_url: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(raw_url) {
        if let Some((_, value)) = parsed.query_pairs().find(|(key, _)| key == "v") {
            // First `v` value wins, but it still has to look like a video id.
            return VIDEO_ID_RE.is_match(&value).then(|| value.into_owned());
        }
    }

    SHORTLINK_RE
        .captures(raw_url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
