//! crates/tooldex_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or presentation format.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a tool record. Unique within the catalog for its lifetime.
pub type ToolId = Uuid;

/// Popularity assigned to records created through the add-tool form.
pub const DEFAULT_POPULARITY: u32 = 50;

//=========================================================================================
// Enumerations
//=========================================================================================

/// The fixed category set. Records carry exactly one of these; the set is
/// not user-extensible. Ids that are not part of the set deserialize into
/// `Other`, whose metadata doubles as the fallback icon/color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    TextGeneration,
    ImageGeneration,
    CodeAssistant,
    VideoAudio,
    Research,
    Productivity,
    Design,
    Music,
    AppBuilder,
    MangaAnime,
    Entertainment,
    Animation3d,
    Other,
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Category::parse(&id))
    }
}

/// Display metadata for a category: name, icon glyph, and a color token the
/// presentation layer maps onto its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl Category {
    /// Every selectable category, in sidebar display order.
    pub const ALL: [Category; 12] = [
        Category::TextGeneration,
        Category::ImageGeneration,
        Category::CodeAssistant,
        Category::VideoAudio,
        Category::Research,
        Category::Productivity,
        Category::Design,
        Category::Music,
        Category::AppBuilder,
        Category::MangaAnime,
        Category::Entertainment,
        Category::Animation3d,
    ];

    pub fn meta(self) -> CategoryMeta {
        match self {
            Category::TextGeneration => CategoryMeta {
                id: "text-generation",
                name: "Text Generation",
                icon: "¶",
                color: "cyan",
            },
            Category::ImageGeneration => CategoryMeta {
                id: "image-generation",
                name: "Image Generation",
                icon: "◍",
                color: "green",
            },
            Category::CodeAssistant => CategoryMeta {
                id: "code-assistant",
                name: "Code Assistant",
                icon: "λ",
                color: "red",
            },
            Category::VideoAudio => CategoryMeta {
                id: "video-audio",
                name: "Video & Audio",
                icon: "▶",
                color: "magenta",
            },
            Category::Research => CategoryMeta {
                id: "research",
                name: "Research",
                icon: "∴",
                color: "yellow",
            },
            Category::Productivity => CategoryMeta {
                id: "productivity",
                name: "Productivity",
                icon: "↯",
                color: "lightred",
            },
            Category::Design => CategoryMeta {
                id: "design",
                name: "Design",
                icon: "✎",
                color: "lightcyan",
            },
            Category::Music => CategoryMeta {
                id: "music",
                name: "Music Generation",
                icon: "♫",
                color: "lightmagenta",
            },
            Category::AppBuilder => CategoryMeta {
                id: "app-builder",
                name: "App Builder",
                icon: "▣",
                color: "lightgreen",
            },
            Category::MangaAnime => CategoryMeta {
                id: "manga-anime",
                name: "Manga & Anime",
                icon: "✦",
                color: "lightmagenta",
            },
            Category::Entertainment => CategoryMeta {
                id: "entertainment",
                name: "Entertainment",
                icon: "♥",
                color: "red",
            },
            Category::Animation3d => CategoryMeta {
                id: "3d-animation",
                name: "3D & Animation",
                icon: "◫",
                color: "blue",
            },
            Category::Other => CategoryMeta {
                id: "other",
                name: "Other",
                icon: "•",
                color: "gray",
            },
        }
    }

    pub fn id(self) -> &'static str {
        self.meta().id
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    /// Parses a category id, falling back to `Other` for ids outside the
    /// fixed set so icon/color lookup always succeeds.
    pub fn parse(id: &str) -> Category {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == id)
            .unwrap_or(Category::Other)
    }
}

/// Pricing tier of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pricing {
    Free,
    #[default]
    Freemium,
    Paid,
}

impl Pricing {
    pub const ALL: [Pricing; 3] = [Pricing::Free, Pricing::Freemium, Pricing::Paid];

    pub fn label(self) -> &'static str {
        match self {
            Pricing::Free => "Free",
            Pricing::Freemium => "Freemium",
            Pricing::Paid => "Paid",
        }
    }
}

/// Ordering applied to filter results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Popular,
    Name,
    Rating,
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Popular, SortKey::Name, SortKey::Rating, SortKey::Newest];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Popular => "Most Popular",
            SortKey::Name => "Name",
            SortKey::Rating => "Rating",
            SortKey::Newest => "Newest",
        }
    }
}

//=========================================================================================
// Records
//=========================================================================================

/// One catalog entry representing an external AI product or service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Insertion order preserved for display; duplicates removed.
    pub tags: Vec<String>,
    pub website: String,
    pub pricing: Pricing,
    pub rating: f32,
    pub popularity: u32,
    pub release_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The editable fields of a tool, as captured by the add/edit form.
/// `tags` is the raw comma-separated field; `parse_tags` derives the list.
#[derive(Debug, Clone)]
pub struct ToolDraft {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub tags: String,
    pub website: String,
    pub pricing: Pricing,
    pub rating: f32,
    pub image_url: Option<String>,
}

impl ToolDraft {
    /// Pre-fills a draft from an existing record for the edit form,
    /// re-joining the tag list with ", ".
    pub fn from_tool(tool: &Tool) -> Self {
        Self {
            name: tool.name.clone(),
            description: tool.description.clone(),
            category: tool.category,
            tags: tool.tags.join(", "),
            website: tool.website.clone(),
            pricing: tool.pricing,
            rating: tool.rating,
            image_url: tool.image_url.clone(),
        }
    }

    /// Name and website are the required form fields; submission stays
    /// disabled until both are non-empty.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.website.trim().is_empty()
    }
}

impl Default for ToolDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: Category::TextGeneration,
            tags: String::new(),
            website: String::new(),
            pricing: Pricing::Freemium,
            rating: 4.0,
            image_url: None,
        }
    }
}

/// Splits a comma-separated tag field into the record's tag list:
/// trimmed, empties discarded, duplicates removed keeping first occurrence.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for piece in raw.split(',') {
        let tag = piece.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Returns the current calendar year as the release-year string assigned to
/// newly created records.
pub fn current_year() -> String {
    Utc::now().year().to_string()
}

//=========================================================================================
// Identity
//=========================================================================================

/// The demo-authenticated identity. Owned by the running session only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags_trims_and_drops_empties() {
        assert_eq!(parse_tags(" nlp , chat,, art "), vec!["nlp", "chat", "art"]);
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags(" , ,"), Vec::<String>::new());
    }

    #[test]
    fn parse_tags_dedups_preserving_first_occurrence() {
        assert_eq!(parse_tags("art, nlp, art"), vec!["art", "nlp"]);
    }

    #[test]
    fn category_ids_round_trip_through_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.id()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn unknown_category_id_falls_back_to_other() {
        let parsed: Category = serde_json::from_str("\"quantum-basket-weaving\"").unwrap();
        assert_eq!(parsed, Category::Other);
        assert_eq!(Category::parse("quantum-basket-weaving"), Category::Other);
        assert_eq!(Category::parse("music"), Category::Music);
    }

    #[test]
    fn pricing_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Pricing::Freemium).unwrap(), "\"freemium\"");
        let parsed: Pricing = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(parsed, Pricing::Paid);
    }

    #[test]
    fn draft_requires_name_and_website() {
        let mut draft = ToolDraft::default();
        assert!(!draft.is_submittable());
        draft.name = "Chat".into();
        assert!(!draft.is_submittable());
        draft.website = "https://chat.example".into();
        assert!(draft.is_submittable());
    }
}
