//! Icon tags and their glyphs

use serde::{Deserialize, Deserializer, Serialize};

/// Icon tag attached to a folder
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IconTag {
    Gift,
    Check,
    Lightbulb,
    Briefcase,
    Book,
    Plus,
    Folder,
    Archive,
    Image,
    Download,
}

impl IconTag {
    pub const ALL: [IconTag; 10] = [
        Self::Gift,
        Self::Check,
        Self::Lightbulb,
        Self::Briefcase,
        Self::Book,
        Self::Plus,
        Self::Folder,
        Self::Archive,
        Self::Image,
        Self::Download,
    ];

    /// Look up a tag by its key; unknown keys give `None`
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.key().eq_ignore_ascii_case(key))
    }

    /// Resolve a key, using `fallback` for unknown tags
    pub fn parse_or(key: &str, fallback: IconTag) -> Self {
        Self::parse(key).unwrap_or_else(|| {
            tracing::debug!(key, fallback = fallback.key(), "unknown icon tag");
            fallback
        })
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Gift => "gift",
            Self::Check => "check",
            Self::Lightbulb => "lightbulb",
            Self::Briefcase => "briefcase",
            Self::Book => "book",
            Self::Plus => "plus",
            Self::Folder => "folder",
            Self::Archive => "archive",
            Self::Image => "image",
            Self::Download => "download",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Gift => "🎁",
            Self::Check => "✅",
            Self::Lightbulb => "💡",
            Self::Briefcase => "💼",
            Self::Book => "📖",
            Self::Plus => "➕",
            Self::Folder => "📂",
            Self::Archive => "🗄️",
            Self::Image => "🖼️",
            Self::Download => "📥",
        }
    }
}

/// Deserialize a tag, mapping unknown keys to [`IconTag::Folder`]
pub fn deserialize_or_folder<'de, D>(deserializer: D) -> Result<IconTag, D::Error>
where
    D: Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    Ok(IconTag::parse_or(&key, IconTag::Folder))
}

impl std::fmt::Display for IconTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_round_trips_through_its_key() {
        for tag in IconTag::ALL {
            assert_eq!(IconTag::parse(tag.key()), Some(tag));
        }
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        assert_eq!(IconTag::parse("rocket"), None);
        assert_eq!(IconTag::parse_or("rocket", IconTag::Gift), IconTag::Gift);
        assert_eq!(IconTag::parse_or("", IconTag::Folder), IconTag::Folder);
        assert_eq!(IconTag::parse_or("Archive", IconTag::Folder), IconTag::Archive);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut glyphs: Vec<&str> = IconTag::ALL.iter().map(|tag| tag.glyph()).collect();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), IconTag::ALL.len());
    }

    #[test]
    fn test_serde_uses_keys() {
        assert_eq!(serde_json::to_string(&IconTag::Lightbulb).unwrap(), "\"lightbulb\"");
        let tag: IconTag = serde_json::from_str("\"download\"").unwrap();
        assert_eq!(tag, IconTag::Download);
    }
}
