//! crates/tooldex_core/src/catalog.rs
//!
//! The Tool Catalog Store: the working collection of tool records, held in
//! memory and mutated in place. Initialized from the seed dataset at startup.

use uuid::Uuid;

use crate::domain::{parse_tags, current_year, Category, Tool, ToolDraft, ToolId, DEFAULT_POPULARITY};

/// Errors reported by catalog mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No tool with id {0} exists in the catalog")]
    NotFound(ToolId),
}

/// The in-memory tool collection.
///
/// Invariant: no two records share an identifier. `new` and `replace` uphold
/// it by dropping duplicate ids from their input (first occurrence wins);
/// `add` upholds it by assigning a fresh UUID.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    pub fn new(seed: Vec<Tool>) -> Self {
        let mut catalog = Catalog::default();
        catalog.replace(seed);
        catalog
    }

    /// Installs a full collection, used at load time. Records whose id was
    /// already seen are dropped.
    pub fn replace(&mut self, tools: Vec<Tool>) {
        self.tools.clear();
        for tool in tools {
            if self.get(tool.id).is_none() {
                self.tools.push(tool);
            }
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn get(&self, id: ToolId) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Appends a new record built from the form draft. The identifier is
    /// assigned here; popularity and release year get their creation-time
    /// defaults. Field presence (name, website) is the form's concern and is
    /// not re-validated. Duplicate names are permitted.
    pub fn add(&mut self, draft: ToolDraft) -> &Tool {
        let tool = Tool {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            tags: parse_tags(&draft.tags),
            website: draft.website,
            pricing: draft.pricing,
            rating: draft.rating,
            popularity: DEFAULT_POPULARITY,
            release_year: current_year(),
            image_url: draft.image_url,
        };
        self.tools.push(tool);
        let last = self.tools.len() - 1;
        &self.tools[last]
    }

    /// Replaces the editable fields of the record matching `id`. The
    /// identifier, popularity, and release year are immutable across the
    /// patch. An unknown id is a reported failure, not a silent no-op.
    pub fn update(&mut self, id: ToolId, draft: ToolDraft) -> Result<&Tool, CatalogError> {
        let tool = self
            .tools
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        tool.name = draft.name;
        tool.description = draft.description;
        tool.category = draft.category;
        tool.tags = parse_tags(&draft.tags);
        tool.website = draft.website;
        tool.pricing = draft.pricing;
        tool.rating = draft.rating;
        tool.image_url = draft.image_url;
        Ok(tool)
    }

    /// Sorted, deduplicated union of every record's tags. Drives the
    /// tag-filter browser.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .tools
            .iter()
            .flat_map(|t| t.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// Number of records in `category`, or in the whole catalog for `None`.
    /// Feeds the per-category counts in the sidebar.
    pub fn count_in(&self, category: Option<Category>) -> usize {
        match category {
            None => self.tools.len(),
            Some(c) => self.tools.iter().filter(|t| t.category == c).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Pricing;

    fn draft(name: &str, website: &str) -> ToolDraft {
        ToolDraft {
            name: name.to_string(),
            website: website.to_string(),
            tags: "nlp, chat".to_string(),
            ..ToolDraft::default()
        }
    }

    #[test]
    fn add_appends_one_record_with_a_fresh_id() {
        let mut catalog = Catalog::default();
        catalog.add(draft("Chat", "https://chat.example"));
        let first_id = catalog.tools()[0].id;

        catalog.add(draft("Paint", "https://paint.example"));
        assert_eq!(catalog.len(), 2);
        assert_ne!(catalog.tools()[1].id, first_id);
    }

    #[test]
    fn add_assigns_creation_defaults() {
        let mut catalog = Catalog::default();
        let tool = catalog.add(draft("Chat", "https://chat.example"));
        assert_eq!(tool.popularity, DEFAULT_POPULARITY);
        assert_eq!(tool.release_year, current_year());
        assert_eq!(tool.tags, vec!["nlp", "chat"]);
    }

    #[test]
    fn update_patches_fields_but_not_identity() {
        let mut catalog = Catalog::default();
        let id = catalog.add(draft("Chat", "https://chat.example")).id;
        let year = catalog.get(id).unwrap().release_year.clone();

        let patch = ToolDraft {
            name: "Chat 2".to_string(),
            website: "https://chat2.example".to_string(),
            pricing: Pricing::Paid,
            tags: "chat".to_string(),
            ..ToolDraft::default()
        };
        let updated = catalog.update(id, patch).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Chat 2");
        assert_eq!(updated.pricing, Pricing::Paid);
        assert_eq!(updated.tags, vec!["chat"]);
        assert_eq!(updated.popularity, DEFAULT_POPULARITY);
        assert_eq!(updated.release_year, year);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn update_unknown_id_reports_not_found_and_changes_nothing() {
        let mut catalog = Catalog::default();
        catalog.add(draft("Chat", "https://chat.example"));
        let before = catalog.tools().to_vec();

        let missing = Uuid::new_v4();
        let err = catalog.update(missing, draft("X", "https://x.example"));
        assert_eq!(err.unwrap_err(), CatalogError::NotFound(missing));
        assert_eq!(catalog.tools().len(), before.len());
        assert_eq!(catalog.tools()[0].name, before[0].name);
    }

    #[test]
    fn replace_drops_duplicate_ids_keeping_first() {
        let mut catalog = Catalog::default();
        let a = catalog.add(draft("Chat", "https://chat.example")).clone();
        let mut twin = a.clone();
        twin.name = "Impostor".to_string();

        catalog.replace(vec![a.clone(), twin]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(a.id).unwrap().name, "Chat");
    }

    #[test]
    fn all_tags_is_sorted_and_unique() {
        let mut catalog = Catalog::default();
        catalog.add(draft("Chat", "https://chat.example"));
        let mut second = draft("Paint", "https://paint.example");
        second.tags = "art, chat".to_string();
        catalog.add(second);

        assert_eq!(catalog.all_tags(), vec!["art", "chat", "nlp"]);
    }

    #[test]
    fn count_in_distinguishes_categories() {
        let mut catalog = Catalog::default();
        catalog.add(draft("Chat", "https://chat.example"));
        let mut second = draft("Paint", "https://paint.example");
        second.category = Category::ImageGeneration;
        catalog.add(second);

        assert_eq!(catalog.count_in(None), 2);
        assert_eq!(catalog.count_in(Some(Category::TextGeneration)), 1);
        assert_eq!(catalog.count_in(Some(Category::Music)), 0);
    }
}
