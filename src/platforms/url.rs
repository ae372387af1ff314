// URL validation and content-ID extraction.
//
// Validation accepts the URL shapes users actually paste — with or without
// scheme and www. Extraction pulls the platform-native identifier out of
// the various path forms each platform serves.

use regex_lite::Regex;

use crate::db::models::Platform;

/// Which platform, if any, recognizes this URL.
pub fn detect_platform(url: &str) -> Option<Platform> {
    if is_valid_youtube_url(url) {
        Some(Platform::Youtube)
    } else if is_valid_instagram_url(url) {
        Some(Platform::Instagram)
    } else {
        None
    }
}

/// Accepts youtube.com and youtu.be URLs with any non-empty path.
pub fn is_valid_youtube_url(url: &str) -> bool {
    let re = Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+$").unwrap();
    re.is_match(url)
}

/// Accepts instagram.com reel and post URLs.
pub fn is_valid_instagram_url(url: &str) -> bool {
    let re = Regex::new(r"^(https?://)?(www\.)?instagram\.com/(reel|p)/[^/]+/?$").unwrap();
    re.is_match(url)
}

/// Extract the 11-character video ID from any of the YouTube URL forms
/// (`watch?v=`, `youtu.be/`, `embed/`, `v/`, `u/<x>/`, `&v=`).
///
/// Anything that doesn't yield an exactly-11-character ID is rejected —
/// that length is fixed for real video IDs.
pub fn extract_video_id(url: &str) -> Option<String> {
    let re = Regex::new(r"(youtu\.be/|/v/|/u/\w/|embed/|watch\?v=|&v=)([^#&?]*)").unwrap();
    let id = re.captures(url)?.get(2)?.as_str();
    if id.len() == 11 {
        Some(id.to_string())
    } else {
        None
    }
}

/// Extract the shortcode from an Instagram reel or post URL.
pub fn extract_shortcode(url: &str) -> Option<String> {
    let re = Regex::new(r"instagram\.com/(reel|p)/([^/?#]+)").unwrap();
    let code = re.captures(url)?.get(2)?.as_str();
    Some(code.to_string())
}
