//! Discovery query built from command-line input.

use talentboard_core::{DiscoveryQuery, ALL_CATEGORIES};

/// Build a query from raw user input.
///
/// Search and category are trimmed here, at the input boundary; the core
/// filter matches whatever term it is given. A blank category means all
/// categories and an unparseable limit is ignored.
pub fn build_query(
    search: Option<&str>,
    category: Option<&str>,
    limit: Option<&str>,
) -> DiscoveryQuery {
    let mut query = DiscoveryQuery::default()
        .with_search(search.map(str::trim).unwrap_or_default())
        .with_category(
            category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(ALL_CATEGORIES),
        );

    if let Some(limit) = limit.and_then(|v| v.trim().parse().ok()) {
        query = query.with_limit(limit);
    }

    query
}
