// src/transcript.rs

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Language value that requests automatic track selection.
pub const AUTO_LANG: &str = "auto";

/// One available transcript option for a video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TranscriptTrack {
    /// BCP-47 style language code, e.g. 'en' or 'ko'
    pub language_code: String,
    /// Human-readable language name as reported by the listing
    pub language: String,
    /// true for auto-generated captions, false for manually authored ones
    pub is_generated: bool,
}

/// One timed caption entry of a fetched track.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TranscriptLine {
    pub text: String,
}

/// Selects exactly one track from a listing.
///
/// With an explicit language the match must be exact; silently substituting
/// another language would violate caller intent, so a miss fails without any
/// fallback to auto-detection. In auto mode manual tracks always outrank
/// generated ones; within each partition the first track in listing order
/// wins.
pub fn select_track<'a>(
    requested_lang: &str,
    tracks: &'a [TranscriptTrack],
) -> Result<&'a TranscriptTrack, ServiceError> {
    if requested_lang != AUTO_LANG {
        return tracks
            .iter()
            .find(|track| track.language_code == requested_lang)
            .ok_or_else(|| {
                ServiceError::NoTranscript(format!(
                    "Could not find transcript for the specifically requested language: '{}'",
                    requested_lang
                ))
            });
    }

    let manual = tracks.iter().find(|track| !track.is_generated);
    let generated = tracks.iter().find(|track| track.is_generated);

    manual.or(generated).ok_or_else(|| {
        ServiceError::NoTranscript("No transcript found with auto-detection.".to_string())
    })
}

/// Flattens an ordered sequence of caption lines into one string: trims each
/// text, drops lines that are empty after trimming, and joins the rest with
/// single spaces. An empty sequence yields the empty string.
pub fn flatten_lines(lines: &[TranscriptLine]) -> String {
    lines
        .iter()
        .map(|line| line.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
