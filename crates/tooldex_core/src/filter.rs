//! crates/tooldex_core/src/filter.rs
//!
//! The filter/sort engine: a pure function from (catalog, criteria,
//! favorites) to an ordered subset. No side effects, safe to recompute on
//! every criterion change.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Pricing, SortKey, Tool, ToolId};

//=========================================================================================
// Filter Criteria
//=========================================================================================

/// The ephemeral filter criteria, one per running session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Free-text query, matched case-insensitively against name and
    /// description. Empty matches everything.
    pub query: String,
    /// `None` is the "all categories" sentinel.
    pub category: Option<Category>,
    /// `None` is the "all pricing" sentinel.
    pub pricing: Option<Pricing>,
    /// A tool must carry at least one of these, unless the set is empty.
    pub show_tags: BTreeSet<String>,
    /// A tool must carry none of these.
    pub hide_tags: BTreeSet<String>,
    pub favorites_only: bool,
    pub sort: SortKey,
}

impl Filter {
    /// Adds the tag if absent, removes it if present. Toggling twice
    /// returns the filter to its prior state.
    pub fn toggle_show_tag(&mut self, tag: &str) {
        if !self.show_tags.remove(tag) {
            self.show_tags.insert(tag.to_string());
        }
    }

    pub fn toggle_hide_tag(&mut self, tag: &str) {
        if !self.hide_tags.remove(tag) {
            self.hide_tags.insert(tag.to_string());
        }
    }

    /// Resets every criterion except the sort key.
    pub fn clear(&mut self) {
        self.query.clear();
        self.category = None;
        self.pricing = None;
        self.show_tags.clear();
        self.hide_tags.clear();
        self.favorites_only = false;
    }

    /// True when any narrowing criterion is set; drives the "active
    /// filters" summary line.
    pub fn is_narrowed(&self) -> bool {
        !self.query.is_empty()
            || self.category.is_some()
            || self.pricing.is_some()
            || !self.show_tags.is_empty()
            || !self.hide_tags.is_empty()
            || self.favorites_only
    }
}

//=========================================================================================
// The Engine
//=========================================================================================

/// Returns the tools matching `filter`, ordered by its sort key.
///
/// Matching is the conjunction of the six predicates in `matches`. The sort
/// is stable, so repeated application to the same input yields identical
/// output. An empty result is an expected outcome, not an error.
pub fn filter_and_sort<'a>(
    tools: &'a [Tool],
    filter: &Filter,
    favorites: &BTreeSet<ToolId>,
) -> Vec<&'a Tool> {
    let mut matched: Vec<&Tool> = tools
        .iter()
        .filter(|tool| matches(tool, filter, favorites))
        .collect();
    matched.sort_by(|a, b| compare(a, b, filter.sort));
    matched
}

/// All six match conditions AND-ed together.
fn matches(tool: &Tool, filter: &Filter, favorites: &BTreeSet<ToolId>) -> bool {
    let query = filter.query.to_lowercase();
    let matches_query = query.is_empty()
        || tool.name.to_lowercase().contains(&query)
        || tool.description.to_lowercase().contains(&query);

    let matches_category = filter.category.map_or(true, |c| tool.category == c);
    let matches_pricing = filter.pricing.map_or(true, |p| tool.pricing == p);

    let matches_show_tags = filter.show_tags.is_empty()
        || tool.tags.iter().any(|t| filter.show_tags.contains(t));
    let matches_hide_tags =
        filter.hide_tags.is_empty() || !tool.tags.iter().any(|t| filter.hide_tags.contains(t));

    let matches_favorites = !filter.favorites_only || favorites.contains(&tool.id);

    matches_query
        && matches_category
        && matches_pricing
        && matches_show_tags
        && matches_hide_tags
        && matches_favorites
}

fn compare(a: &Tool, b: &Tool, key: SortKey) -> Ordering {
    match key {
        // Case-folded approximation of a locale-aware compare.
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Rating => b.rating.total_cmp(&a.rating),
        SortKey::Newest => release_year(b).cmp(&release_year(a)),
        SortKey::Popular => b.popularity.cmp(&a.popularity),
    }
}

/// Release year as an integer; unparseable years sort last under `newest`.
fn release_year(tool: &Tool) -> i32 {
    tool.release_year.parse().unwrap_or(i32::MIN)
}
