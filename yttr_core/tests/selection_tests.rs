use yttr_core::transcript::{flatten_lines, select_track, TranscriptLine, TranscriptTrack};
use yttr_core::ServiceError;

fn track(language_code: &str, is_generated: bool) -> TranscriptTrack {
    TranscriptTrack {
        language_code: language_code.to_string(),
        language: language_code.to_string(),
        is_generated,
    }
}

fn line(text: &str) -> TranscriptLine {
    TranscriptLine {
        text: text.to_string(),
    }
}

#[test]
fn test_auto_prefers_manual_over_generated() {
    let tracks = vec![track("en", false), track("ko", true)];
    let selected = select_track("auto", &tracks).unwrap();
    assert_eq!(selected.language_code, "en");
    assert!(!selected.is_generated);
}

#[test]
fn test_auto_prefers_manual_regardless_of_listing_position() {
    let tracks = vec![track("ko", true), track("en", false)];
    let selected = select_track("auto", &tracks).unwrap();
    assert_eq!(selected.language_code, "en");
}

#[test]
fn test_auto_falls_back_to_generated() {
    let tracks = vec![track("ko", true)];
    let selected = select_track("auto", &tracks).unwrap();
    assert_eq!(selected.language_code, "ko");
    assert!(selected.is_generated);
}

#[test]
fn test_auto_picks_first_in_listing_order_within_partition() {
    let tracks = vec![track("de", false), track("en", false)];
    let selected = select_track("auto", &tracks).unwrap();
    assert_eq!(selected.language_code, "de");
}

#[test]
fn test_auto_with_no_tracks_fails() {
    let err = select_track("auto", &[]).unwrap_err();
    assert!(matches!(err, ServiceError::NoTranscript(_)));
}

#[test]
fn test_explicit_language_exact_match() {
    let tracks = vec![track("en", false), track("fr", true)];
    let selected = select_track("fr", &tracks).unwrap();
    assert_eq!(selected.language_code, "fr");
}

#[test]
fn test_explicit_language_miss_fails_without_fallback() {
    // An explicit request is a strict contract; no substitution of 'en'
    let tracks = vec![track("en", false)];
    let err = select_track("fr", &tracks).unwrap_err();
    assert!(matches!(err, ServiceError::NoTranscript(_)));
    assert!(err.to_string().contains("'fr'"));
}

#[test]
fn test_flatten_trims_and_joins() {
    let lines = vec![line("  hi "), line(""), line("there")];
    assert_eq!(flatten_lines(&lines), "hi there");
}

#[test]
fn test_flatten_drops_whitespace_only_lines() {
    let lines = vec![line("a"), line("   \t"), line("b")];
    assert_eq!(flatten_lines(&lines), "a b");
}

#[test]
fn test_flatten_empty_sequence_is_empty_string() {
    assert_eq!(flatten_lines(&[]), "");
}

#[test]
fn test_flatten_preserves_order() {
    let lines = vec![line("one"), line("two"), line("three")];
    assert_eq!(flatten_lines(&lines), "one two three");
}
