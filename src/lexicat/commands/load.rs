use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;
use crate::textfile;
use std::path::Path;

/// Loads a vocabulary file into the store. Categories are merged at the
/// category level: a file category whose name is already present is
/// skipped with a warning, not merged into the existing one.
pub fn run(store: &mut CategoryStore, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut added = 0;

    for category in textfile::load_path(path)? {
        let name = category.name().to_string();
        if store.add(category) {
            added += 1;
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Skipped '{}': the category already exists",
                name
            )));
        }
    }

    result.affected = added;
    result.add_message(CmdMessage::success(format!(
        "Loaded {} categor{} from {}",
        added,
        if added == 1 { "y" } else { "ies" },
        path.display()
    )));
    Ok(result)
}

/// Loads a plain word file (one word per line) into one category.
pub fn words(store: &mut CategoryStore, name: &Term, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let category = match store.find_mut(name) {
        Some(category) => category,
        None => {
            result.add_message(CmdMessage::warning(format!("'{}' could not be found", name)));
            return Ok(result);
        }
    };

    let mut added = 0;
    for term in textfile::load_words_path(path)? {
        if category.insert_term(term) {
            added += 1;
        }
    }

    result.affected = added;
    result.add_message(CmdMessage::success(format!(
        "Added {} word(s) to '{}' from {}",
        added,
        name,
        path.display()
    )));
    Ok(result)
}
