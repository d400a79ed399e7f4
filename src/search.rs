//! Fuzzy multi-field ranking over the item catalog
//!
//! Pure and synchronous: a function of (catalog, query) with no I/O. Input
//! debouncing belongs to the UI adapter (see `refresh::Debouncer`), not here.

use crate::models::CatalogEntry;

/// Queries shorter than this (after trimming) get a prompt, not a scan
pub const MIN_QUERY_LEN: usize = 2;

/// Ranked results are truncated to this many entries
pub const MAX_RESULTS: usize = 60;

/// Distinct outcomes of a catalog search. "Query too short" and "no matches"
/// are separate cases on purpose: the caller shows a typing hint for one and
/// a miss message for the other.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    /// The catalog is empty (not yet loaded, or every mirror failed)
    NotLoaded,
    /// The query is too short to rank; caller shows a hint
    Prompt,
    /// A valid query matched nothing
    NoMatches,
    /// Ranked matches, best first, at most [`MAX_RESULTS`]
    Matches(Vec<&'a CatalogEntry>),
}

/// Score and order catalog entries against a free-text query.
pub fn search<'a>(catalog: &'a [CatalogEntry], query: &str) -> SearchOutcome<'a> {
    if catalog.is_empty() {
        return SearchOutcome::NotLoaded;
    }

    let q = query.trim().to_lowercase();
    if q.len() < MIN_QUERY_LEN {
        return SearchOutcome::Prompt;
    }

    // Token bonus only applies to multi-word queries
    let tokens: Vec<&str> = q.split_whitespace().collect();
    let tokens: &[&str] = if tokens.len() >= 2 { &tokens } else { &[] };

    let mut matches: Vec<(u32, &CatalogEntry)> = Vec::new();
    for entry in catalog {
        let s = score(entry, &q, tokens);
        if s > 0 {
            matches.push((s, entry));
        }
    }

    if matches.is_empty() {
        return SearchOutcome::NoMatches;
    }

    // Stable: ties keep the catalog's relative order
    matches.sort_by(|a, b| b.0.cmp(&a.0));
    matches.truncate(MAX_RESULTS);

    SearchOutcome::Matches(matches.into_iter().map(|(_, e)| e).collect())
}

/// Summed integer weights; every clause that hits contributes, not just the
/// first. Works on the entry's pre-lowercased fields so the hot loop does
/// not allocate.
fn score(entry: &CatalogEntry, q: &str, tokens: &[&str]) -> u32 {
    let name = entry.name_lower.as_str();
    let id = entry.id_lower.as_str();

    let mut s = 0;
    if name == q {
        s += 1000;
    }
    if id == q {
        s += 900;
    }
    if name.starts_with(q) {
        s += 260;
    }
    if id.starts_with(q) {
        s += 230;
    }
    if name.contains(q) {
        s += 140;
    }
    if id.contains(q) {
        s += 120;
    }

    // Each token counts on its own; all-token coverage is not required
    for t in tokens {
        if name.contains(t) || id.contains(t) {
            s += 40;
        }
    }

    s
}
