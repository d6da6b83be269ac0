use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;

pub fn insert(store: &mut CategoryStore, name: &Term, terms: &[Term]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let category = match store.find_mut(name) {
        Some(category) => category,
        None => {
            result.add_message(CmdMessage::warning(format!("'{}' could not be found", name)));
            return Ok(result);
        }
    };

    let mut added = 0;
    for term in terms {
        if term.is_empty() {
            continue;
        }
        if category.insert_term(term.clone()) {
            added += 1;
        } else {
            result.add_message(CmdMessage::warning(format!(
                "'{}' is already in '{}'",
                term, name
            )));
        }
    }

    result.affected = added;
    result.add_message(CmdMessage::success(format!(
        "{} word(s) added to '{}'",
        added, name
    )));
    Ok(result)
}

pub fn remove(store: &mut CategoryStore, name: &Term, term: &Term) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let category = match store.find_mut(name) {
        Some(category) => category,
        None => {
            result.add_message(CmdMessage::warning(format!("'{}' could not be found", name)));
            return Ok(result);
        }
    };

    if category.remove_term(term) {
        result.affected = 1;
        result.add_message(CmdMessage::success(format!(
            "'{}' was removed from '{}'",
            term, name
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "'{}' is not in '{}'",
            term, name
        )));
    }
    Ok(result)
}
