//! Navigation parameters passed from the folder grid to the detail screen

use serde::{Deserialize, Serialize};

use crate::{AccentColor, FolderSummary, IconTag};

const DEFAULT_NAME: &str = "Present Ideas";

/// Query parameters of `/folder/:id`
///
/// Values arrive as plain strings from the URL, so every field is optional
/// and resolved with a fallback when read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolderParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl FolderParams {
    pub fn name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => DEFAULT_NAME,
        }
    }

    pub fn icon(&self) -> IconTag {
        self.icon
            .as_deref()
            .map(|key| IconTag::parse_or(key, IconTag::Gift))
            .unwrap_or(IconTag::Gift)
    }

    pub fn color(&self) -> AccentColor {
        match self.color.as_deref().map(AccentColor::parse) {
            Some(Ok(color)) => color,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "bad folder color parameter");
                AccentColor::default()
            }
            None => AccentColor::default(),
        }
    }
}

impl From<&FolderSummary> for FolderParams {
    fn from(folder: &FolderSummary) -> Self {
        Self {
            name: Some(folder.name.clone()),
            icon: Some(folder.icon.key().to_string()),
            color: Some(folder.color.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FolderId;

    #[test]
    fn test_defaults_when_missing() {
        let params = FolderParams::default();
        assert_eq!(params.name(), "Present Ideas");
        assert_eq!(params.icon(), IconTag::Gift);
        assert_eq!(params.color().as_str(), "#6366F1");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let params = FolderParams {
            name: Some("   ".to_string()),
            icon: Some("rocket".to_string()),
            color: Some("blue".to_string()),
        };
        assert_eq!(params.name(), "Present Ideas");
        assert_eq!(params.icon(), IconTag::Gift);
        assert_eq!(params.color(), AccentColor::default());
    }

    #[test]
    fn test_from_folder() {
        let folder = FolderSummary {
            id: FolderId::new("4"),
            name: "Work Notes".to_string(),
            description: "Meeting with client about new project".to_string(),
            item_count: 5,
            color: AccentColor::parse("#10B981").unwrap(),
            icon: IconTag::Briefcase,
        };

        let params = FolderParams::from(&folder);
        assert_eq!(params.name(), "Work Notes");
        assert_eq!(params.icon(), IconTag::Briefcase);
        assert_eq!(params.color().as_str(), "#10B981");

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["icon"], "briefcase");
    }
}
