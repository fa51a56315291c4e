//! Test fixtures for integration tests
//!
//! Provides requests for typical broadcast jobs without real media files.

use crate::languages::BROADCAST_ORDER;
use crate::request::MuxRequest;

pub const VIDEO: &str = "/media/in/video.mxf";
pub const DESTINATION: &str = "/media/out";
pub const OUTPUT_NAME: &str = "programme.mxf";

/// Path of the audio file for a language
pub fn audio_path(language: &str) -> String {
    format!("/media/in/{}.wav", language)
}

/// Request with files for the given languages
pub fn request_with(fallback: &str, languages: &[&str]) -> MuxRequest {
    languages.iter().fold(
        MuxRequest::new(VIDEO, fallback, DESTINATION, OUTPUT_NAME),
        |request, code| request.with_audio(code, audio_path(code)),
    )
}

/// Norwegian, English and Finnish audio, Norwegian fallback
pub fn norwegian_english_finnish() -> MuxRequest {
    request_with("nor", &["nor", "eng", "fin"]).with_stereo_languages(&["nor", "eng", "fin"])
}

/// Only the fallback language has audio
pub fn fallback_only(fallback: &str) -> MuxRequest {
    request_with(fallback, &[fallback])
}

/// Every canonical language has audio
pub fn all_languages() -> MuxRequest {
    request_with("nor", &BROADCAST_ORDER)
}

/// A spread of valid requests for property checks
pub fn valid_requests() -> Vec<MuxRequest> {
    vec![
        norwegian_english_finnish(),
        fallback_only("nor"),
        fallback_only("fin"),
        fallback_only("pol"),
        all_languages(),
        request_with("eng", &["eng", "deu"]),
        request_with("deu", &["deu", "nld", "rus", "tur"]),
        request_with("spa", &["spa", "fra", "por", "ron", "nor"]),
    ]
}
