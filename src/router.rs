//! Query-to-domain routing.

use crate::catalog::{DEFAULT_DOMAIN, DOMAIN_KEYWORDS};

/// Pick the most likely domain for a free-text query.
///
/// Counts how many of each domain's keywords appear as substrings of the
/// lowercased query. The first domain with the highest count wins —
/// declaration order in [`DOMAIN_KEYWORDS`] breaks ties. A query that hits
/// nothing routes to the component domain; the router never answers
/// "unknown".
pub fn detect_domain(query: &str) -> &'static str {
    let query_lower = query.to_lowercase();

    let mut best = DEFAULT_DOMAIN;
    let mut best_hits = 0usize;
    for &(domain, keywords) in DOMAIN_KEYWORDS {
        let hits = keywords
            .iter()
            .filter(|&&keyword| query_lower.contains(keyword))
            .count();
        if hits > best_hits {
            best = domain;
            best_hits = hits;
        }
    }
    best
}
