use yttr_core::video_id::VideoId;

#[test]
fn test_watch_urls() {
    for prefix in [
        "https://www.youtube.com",
        "https://youtube.com",
        "https://m.youtube.com",
    ] {
        let id = VideoId::extract(&format!("{}/watch?v=dQw4w9WgXcQ", prefix)).unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }
}

#[test]
fn test_watch_url_with_extra_params() {
    let id = VideoId::extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

#[test]
fn test_short_link() {
    let id = VideoId::extract("https://youtu.be/dQw4w9WgXcQ").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

#[test]
fn test_embed_url() {
    let id = VideoId::extract("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

#[test]
fn test_shorts_url() {
    let id = VideoId::extract("https://www.youtube.com/shorts/dQw4w9WgXcQ").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

#[test]
fn test_nocookie_embed_url() {
    let id = VideoId::extract("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

#[test]
fn test_raw_id_passes_through() {
    let id = VideoId::extract("dQw4w9WgXcQ").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");

    // Underscore and hyphen are part of the id alphabet
    let id = VideoId::extract("3_BXIQIdZ-4").unwrap();
    assert_eq!(id.as_str(), "3_BXIQIdZ-4");
}

#[test]
fn test_empty_input_rejected() {
    assert!(VideoId::extract("").is_err());
}

#[test]
fn test_wrong_length_rejected() {
    assert!(VideoId::extract("short").is_err());
    assert!(VideoId::extract("waaaaaaaaaaaaaaytoolong").is_err());
}

#[test]
fn test_invalid_characters_rejected() {
    // 11 characters, but '!' is outside the id alphabet
    assert!(VideoId::extract("dQw4w9WgXc!").is_err());
}

#[test]
fn test_watch_url_with_bad_id_rejected() {
    // Structurally valid URL position, but value is not an 11-char id;
    // it must be ignored, not coerced
    assert!(VideoId::extract("https://www.youtube.com/watch?v=tooshort").is_err());
    assert!(VideoId::extract("https://www.youtube.com/watch?v=dQw4w9WgXcQextra").is_err());
}

#[test]
fn test_watch_url_without_v_param_rejected() {
    assert!(VideoId::extract("https://www.youtube.com/watch?list=PL123").is_err());
}

#[test]
fn test_unrelated_host_rejected() {
    assert!(VideoId::extract("https://vimeo.com/watch?v=dQw4w9WgXcQ").is_err());
}

#[test]
fn test_unrelated_url_rejected() {
    assert!(VideoId::extract("https://www.youtube.com/feed/subscriptions").is_err());
}

#[test]
fn test_embed_url_with_trailing_path() {
    let id = VideoId::extract("https://www.youtube.com/embed/dQw4w9WgXcQ/extra").unwrap();
    assert_eq!(id.as_str(), "dQw4w9WgXcQ");
}

#[test]
fn test_error_carries_original_input() {
    let err = VideoId::extract("not a video").unwrap_err();
    assert!(err.to_string().contains("not a video"));
}
