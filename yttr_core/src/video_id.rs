// src/video_id.rs

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::ServiceError;

static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("video id pattern must compile")
});

/// Canonical 11-character YouTube video identifier.
///
/// Constructed only through [`VideoId::extract`]; once built it is
/// guaranteed to match `^[a-zA-Z0-9_-]{11}$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// Derives a video id from a free-form URL or raw id string.
    ///
    /// YouTube surfaces the same video under several URL shapes (watch,
    /// youtu.be short links, embed, shorts, the privacy-enhanced
    /// youtube-nocookie.com domain). Extraction runs as an ordered chain of
    /// strategies: URL-based extraction first, then the raw-id check. A URL
    /// parse failure or a recognized path holding a non-matching value falls
    /// through to the next strategy instead of failing the whole call, so a
    /// bare id still matches even when it spuriously parses as a URL.
    pub fn extract(input: &str) -> Result<Self, ServiceError> {
        if input.is_empty() {
            return Err(ServiceError::InvalidParams(
                "YouTube URL or ID is required".to_string(),
            ));
        }

        if let Some(id) = extract_from_url(input) {
            return Ok(VideoId(id));
        }

        if VIDEO_ID_RE.is_match(input) {
            return Ok(VideoId(input.to_string()));
        }

        Err(ServiceError::InvalidParams(format!(
            "Invalid or unsupported YouTube URL/ID format: {}",
            input
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-based extraction. Returns `None` on any miss so the caller can fall
/// through to the raw-id check.
fn extract_from_url(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    let host = url.host_str()?;

    // Standard youtube.com URLs (www, no subdomain, m., music)
    if host.contains("youtube.com") {
        if url.path() == "/watch" {
            let (_, value) = url.query_pairs().find(|(key, _)| key == "v")?;
            return checked(&value);
        }
        if let Some(rest) = url.path().strip_prefix("/embed/") {
            return checked(first_segment(rest));
        }
        if let Some(rest) = url.path().strip_prefix("/shorts/") {
            return checked(first_segment(rest));
        }
        return None;
    }

    // Short youtu.be URLs
    if host == "youtu.be" {
        return checked(url.path().trim_start_matches('/'));
    }

    // Privacy-enhanced embeds
    if host.contains("youtube-nocookie.com") {
        if let Some(rest) = url.path().strip_prefix("/embed/") {
            return checked(first_segment(rest));
        }
    }

    None
}

fn first_segment(path: &str) -> &str {
    path.split('/').next().unwrap_or_default()
}

/// Accepts a candidate only when it matches the 11-character pattern.
/// Wrong-length or invalid-character values are ignored, never coerced.
fn checked(candidate: &str) -> Option<String> {
    if VIDEO_ID_RE.is_match(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}
