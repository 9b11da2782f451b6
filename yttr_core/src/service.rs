// src/service.rs

use async_trait::async_trait;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::error::ServiceError;
use crate::transcript::{TranscriptLine, TranscriptTrack};
use crate::video_id::VideoId;

/// External transcript service seam.
///
/// The core only needs two capabilities from the outside world: list the
/// available tracks for a video and fetch the lines of a chosen track. Tests
/// substitute mock implementations at this boundary.
#[async_trait]
pub trait TranscriptService: Send + Sync {
    async fn list_tracks(&self, video_id: &VideoId) -> Result<Vec<TranscriptTrack>, ServiceError>;

    async fn fetch_track(
        &self,
        video_id: &VideoId,
        track: &TranscriptTrack,
    ) -> Result<Vec<TranscriptLine>, ServiceError>;
}

/// [`TranscriptService`] backed by the yt-transcript-rs scraping client.
pub struct YouTubeTranscriptService {
    api: YouTubeTranscriptApi,
}

impl YouTubeTranscriptService {
    pub fn new() -> Result<Self, ServiceError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| ServiceError::Other(e.to_string()))?;
        Ok(Self { api })
    }
}

#[async_trait]
impl TranscriptService for YouTubeTranscriptService {
    async fn list_tracks(&self, video_id: &VideoId) -> Result<Vec<TranscriptTrack>, ServiceError> {
        // Guard against upstream panics in the scraping client
        let listing = AssertUnwindSafe(self.api.list_transcripts(video_id.as_str()))
            .catch_unwind()
            .await
            .map_err(|_| ServiceError::Other("YouTube transcript listing panicked".to_string()))?
            .map_err(|e| classify_upstream_error(&e.to_string()))?;

        let mut tracks = Vec::new();
        for t in listing.transcripts() {
            tracks.push(TranscriptTrack {
                language_code: t.language_code().to_string(),
                language: t.language().to_string(),
                is_generated: t.is_generated(),
            });
        }

        Ok(tracks)
    }

    async fn fetch_track(
        &self,
        video_id: &VideoId,
        track: &TranscriptTrack,
    ) -> Result<Vec<TranscriptLine>, ServiceError> {
        let languages = [track.language_code.as_str()];

        let fetched = AssertUnwindSafe(self.api.fetch_transcript(
            video_id.as_str(),
            &languages,
            false,
        ))
        .catch_unwind()
        .await
        .map_err(|_| ServiceError::Other("YouTube transcript fetch panicked".to_string()))?
        .map_err(|e| classify_upstream_error(&e.to_string()))?;

        let lines = fetched
            .parts()
            .iter()
            .map(|part| TranscriptLine {
                text: part.text.clone(),
            })
            .collect();

        Ok(lines)
    }
}

/// Maps upstream failure text onto the error taxonomy. The scraping client
/// only exposes its failure reason through Display, so availability errors
/// are recognized by their wording; anything unrecognized stays an internal
/// failure.
fn classify_upstream_error(detail: &str) -> ServiceError {
    let lowered = detail.to_lowercase();

    if lowered.contains("disabled") {
        ServiceError::TranscriptsDisabled(detail.to_string())
    } else if lowered.contains("no transcript")
        || lowered.contains("not found")
        || lowered.contains("unavailable")
    {
        ServiceError::NoTranscript(detail.to_string())
    } else {
        ServiceError::Other(detail.to_string())
    }
}
