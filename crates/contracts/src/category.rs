use serde::{Deserialize, Serialize};

/// The fixed file groupings exposed to the sales team
///
/// The variant doubles as the on-disk folder key, so the set of valid
/// categories and the set of valid storage folders stay closed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Catalog,
    Manual,
    Video,
    Application,
}

impl CategoryKey {
    /// On-disk folder name under the data root
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Catalog => "catalog",
            CategoryKey::Manual => "manual",
            CategoryKey::Video => "video",
            CategoryKey::Application => "application",
        }
    }

    /// Human-readable name shown by the UI Shell
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryKey::Catalog => "Catalog",
            CategoryKey::Manual => "Manual",
            CategoryKey::Video => "Video",
            CategoryKey::Application => "Application",
        }
    }

    /// All categories, in the order the UI presents them
    pub fn all() -> [CategoryKey; 4] {
        [
            CategoryKey::Catalog,
            CategoryKey::Manual,
            CategoryKey::Video,
            CategoryKey::Application,
        ]
    }

    /// Parse a folder key back into a category
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "catalog" => Some(CategoryKey::Catalog),
            "manual" => Some(CategoryKey::Manual),
            "video" => Some(CategoryKey::Video),
            "application" => Some(CategoryKey::Application),
            _ => None,
        }
    }
}

/// Category descriptor handed to the UI Shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub key: CategoryKey,
    pub display_name: String,
}

impl CategoryInfo {
    pub fn of(key: CategoryKey) -> Self {
        Self {
            key,
            display_name: key.display_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fixed_categories_with_stable_keys() {
        let all = CategoryKey::all();
        assert_eq!(all.len(), 4);
        let keys: Vec<&str> = all.iter().map(|c| c.as_str()).collect();
        assert_eq!(keys, vec!["catalog", "manual", "video", "application"]);
    }

    #[test]
    fn from_key_round_trips() {
        for key in CategoryKey::all() {
            assert_eq!(CategoryKey::from_key(key.as_str()), Some(key));
        }
        assert_eq!(CategoryKey::from_key("archive"), None);
        assert_eq!(CategoryKey::from_key(""), None);
    }

    #[test]
    fn serde_uses_folder_key() {
        let json = serde_json::to_string(&CategoryKey::Catalog).unwrap();
        assert_eq!(json, "\"catalog\"");
        let back: CategoryKey = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(back, CategoryKey::Video);
    }
}
