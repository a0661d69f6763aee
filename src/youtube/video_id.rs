//! Video ID extraction from the URL shapes people paste.

/// Extract a video ID from a YouTube URL.
///
/// First match wins:
/// - `youtu.be` links yield the last path segment, without any query string
///   or fragment (`https://youtu.be/abc?t=30` yields `abc`).
/// - `youtube.com` links yield the value after `v=` up to the next `&`.
/// - Anything else is assumed to already be an ID and is returned unchanged.
///
/// The result is not validated; a bad ID surfaces as a caption fetch failure.
pub fn extract_video_id(url: &str) -> String {
    if url.contains("youtu.be") {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        path.rsplit('/').next().unwrap_or(path).to_string()
    } else if url.contains("youtube.com") {
        match url.split_once("v=") {
            Some((_, rest)) => rest.split(['&', '#']).next().unwrap_or(rest).to_string(),
            // Channel or playlist pages have no `v=`; let the fetch report it.
            None => url.to_string(),
        }
    } else {
        url.to_string()
    }
}
