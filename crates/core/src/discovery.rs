//! Catalog discovery: free-text/category filtering and display ranking.
//!
//! Everything here is pure. Inputs are never mutated; every function
//! returns a fresh sequence. The catalog as fetched is unordered, so the
//! display order is always the output of [`rank`].

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::project::Project;

/// Category selector value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Viewer-controlled discovery parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryQuery {
    pub search_term: String,
    pub category: String,
    /// Truncate the ranked result to this many entries (compact views).
    pub limit: Option<usize>,
}

impl Default for DiscoveryQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            limit: None,
        }
    }
}

impl DiscoveryQuery {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Filter, rank, then truncate. Truncation never happens before ranking.
pub fn discover(projects: &[Project], query: &DiscoveryQuery) -> Vec<Project> {
    let filtered = filter(projects, &query.search_term, &query.category);
    let mut ranked = rank(&filtered);
    if let Some(limit) = query.limit {
        ranked.truncate(limit);
    }
    ranked
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep projects whose title or description contains `search_term`
/// (case-insensitive) and whose category matches.
///
/// The term is matched exactly as given, surrounding whitespace included.
/// An empty term matches every project, including ones without a title or
/// description. With a non-empty term, a missing title/description never
/// matches.
pub fn filter(projects: &[Project], search_term: &str, category: &str) -> Vec<Project> {
    let needle = search_term.to_lowercase();

    projects
        .iter()
        .filter(|p| matches_term(p, &needle) && matches_category(p, category))
        .cloned()
        .collect()
}

fn matches_term(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    };
    contains(&project.title) || contains(&project.description)
}

fn matches_category(project: &Project, category: &str) -> bool {
    category == ALL_CATEGORIES || project.category == category
}

/// Category picker options: [`ALL_CATEGORIES`] followed by the distinct
/// non-empty categories present in the catalog, ascending.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let distinct: BTreeSet<&str> = projects
        .iter()
        .map(|p| p.category.as_str())
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
        .collect();

    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(distinct.into_iter().map(str::to_string))
        .collect()
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Display order: most applicants first, then newest first.
///
/// Uses a stable sort, so projects equal on both keys keep their relative
/// input order. A project without `created_at` sorts after every dated one
/// with the same applicant count.
pub fn rank(projects: &[Project]) -> Vec<Project> {
    let mut ranked = projects.to_vec();
    ranked.sort_by(compare_for_display);
    ranked
}

/// [`rank`], then keep the first `limit` entries.
pub fn rank_limited(projects: &[Project], limit: usize) -> Vec<Project> {
    let mut ranked = rank(projects);
    ranked.truncate(limit);
    ranked
}

fn compare_for_display(a: &Project, b: &Project) -> Ordering {
    b.applicant_count
        .cmp(&a.applicant_count)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
