use regex::Regex;

use crate::model::AssetKind;

/// How an asset's resource should be presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    /// Direct video file, playable inline
    Video(String),
    /// Direct audio file, playable inline
    Audio(String),
    /// Hosted video rewritten to its embeddable form
    Embed(String),
    /// Plain outbound link, possibly with no target at all
    Link(Option<String>),
}

const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".ogv", ".ogg"];
const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".ogg"];
const HOSTED_VIDEO_HOSTS: &[&str] = &["youtube.com", "youtu.be", "drive.google.com"];

/// Decide how to present an asset's resource. First match wins:
/// inline video, inline audio, hosted embed, then a plain link
/// (also used when there is no url at all).
pub fn resolve(kind: AssetKind, url: Option<&str>) -> Media {
    let url = match url.filter(|u| !u.is_empty()) {
        Some(u) => u,
        None => return Media::Link(None),
    };

    if kind == AssetKind::Video && has_extension(url, VIDEO_EXTENSIONS) {
        return Media::Video(url.to_string());
    }
    if kind == AssetKind::Audio && has_extension(url, AUDIO_EXTENSIONS) {
        return Media::Audio(url.to_string());
    }
    if kind == AssetKind::Video && is_hosted_video(url) {
        return Media::Embed(embed_url(url));
    }

    Media::Link(Some(url.to_string()))
}

/// Rewrite well-known hosted-video links into their embeddable forms.
/// Anything unrecognized comes back unchanged.
pub fn embed_url(url: &str) -> String {
    if let Some(id) = capture(r"(?i)youtube\.com/watch\?v=([^&]+)", url) {
        return format!("https://www.youtube.com/embed/{id}");
    }
    if let Some(id) = capture(r"(?i)youtu\.be/([^?&]+)", url) {
        return format!("https://www.youtube.com/embed/{id}");
    }
    if let Some(id) = capture(r"(?i)drive\.google\.com/file/d/([^/]+)", url) {
        return format!("https://drive.google.com/file/d/{id}/preview");
    }
    url.to_string()
}

/// Case-insensitive suffix match against direct-media extensions
fn has_extension(url: &str, extensions: &[&str]) -> bool {
    let lower = url.to_ascii_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext))
}

fn is_hosted_video(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    HOSTED_VIDEO_HOSTS.iter().any(|host| lower.contains(host))
}

fn capture(pattern: &str, url: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
