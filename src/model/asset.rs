use serde::{Deserialize, Serialize};

/// Kind of content an asset carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    #[default]
    Article,
    Video,
    Audio,
    File,
}

impl AssetKind {
    /// Parse a raw type string. Unrecognized values fall back to Article.
    pub fn parse(raw: &str) -> AssetKind {
        match raw.to_ascii_lowercase().as_str() {
            "video" => AssetKind::Video,
            "audio" => AssetKind::Audio,
            "file" => AssetKind::File,
            _ => AssetKind::Article,
        }
    }

    /// Uppercase label shown in the card sub-line
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Article => "ARTICLE",
            AssetKind::Video => "VIDEO",
            AssetKind::Audio => "AUDIO",
            AssetKind::File => "FILE",
        }
    }

    /// The glyph used inside the card's icon cell
    pub fn icon(self) -> &'static str {
        match self {
            AssetKind::Article => "A",
            AssetKind::Video => "▶",
            AssetKind::Audio => "♪",
            AssetKind::File => "▤",
        }
    }
}

/// One piece of content attached to a task.
///
/// Fields are fully resolved during normalization: every asset has a
/// canonical id and title regardless of which source aliases were
/// present. Generated ids are display-only keys and not stable across
/// reloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub description: String,
    pub url: Option<String>,
    /// Source mime/subtype hint, carried through but currently unused
    pub subtype: Option<String>,
}

impl Asset {
    /// The url, treating an explicitly-empty string as absent
    pub fn resource_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(AssetKind::parse("video"), AssetKind::Video);
        assert_eq!(AssetKind::parse("AUDIO"), AssetKind::Audio);
        assert_eq!(AssetKind::parse("File"), AssetKind::File);
        assert_eq!(AssetKind::parse("article"), AssetKind::Article);
        // Unrecognized values default to article
        assert_eq!(AssetKind::parse("podcast"), AssetKind::Article);
        assert_eq!(AssetKind::parse(""), AssetKind::Article);
    }

    #[test]
    fn test_resource_url_treats_empty_as_absent() {
        let mut asset = Asset {
            id: "a1".into(),
            title: "T".into(),
            kind: AssetKind::Article,
            description: String::new(),
            url: Some(String::new()),
            subtype: None,
        };
        assert_eq!(asset.resource_url(), None);
        asset.url = Some("https://example.com".into());
        assert_eq!(asset.resource_url(), Some("https://example.com"));
        asset.url = None;
        assert_eq!(asset.resource_url(), None);
    }
}
