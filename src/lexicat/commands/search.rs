use crate::commands::{CmdResult, SearchHit};
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;

/// Checks every category for `term`, reporting a hit per category so the
/// caller can show both matches and misses.
pub fn run(store: &CategoryStore, term: &Term) -> Result<CmdResult> {
    let hits = store
        .iter()
        .map(|category| SearchHit {
            category: category.name().to_string(),
            found: category.contains(term),
        })
        .collect();
    Ok(CmdResult::default().with_hits(hits))
}
