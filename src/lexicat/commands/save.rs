use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;
use crate::textfile;
use std::path::Path;

pub fn run(store: &CategoryStore, path: &Path) -> Result<CmdResult> {
    textfile::save_path(path, store)?;
    let mut result = CmdResult::default().with_affected(store.len());
    result.add_message(CmdMessage::success(format!(
        "Saved {} categor{} to {}",
        store.len(),
        if store.len() == 1 { "y" } else { "ies" },
        path.display()
    )));
    Ok(result)
}

/// Saves one category's words, one per line.
pub fn words(store: &CategoryStore, name: &Term, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let category = match store.find(name) {
        Some(category) => category,
        None => {
            result.add_message(CmdMessage::warning(format!("'{}' could not be found", name)));
            return Ok(result);
        }
    };

    textfile::save_words_path(path, category)?;
    result.affected = category.len();
    result.add_message(CmdMessage::success(format!(
        "Saved {} word(s) from '{}' to {}",
        category.len(),
        name,
        path.display()
    )));
    Ok(result)
}
