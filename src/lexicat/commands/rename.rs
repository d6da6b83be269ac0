use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;

/// Renames a category. The store keeps names unique, so the rename is
/// refused when the target name is already taken.
pub fn run(store: &mut CategoryStore, name: &Term, new_name: &Term) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if new_name.is_empty() {
        result.add_message(CmdMessage::warning("The new name cannot be empty"));
        return Ok(result);
    }
    if store.contains(new_name) {
        result.add_message(CmdMessage::warning(format!(
            "The category '{}' already exists",
            new_name
        )));
        return Ok(result);
    }
    match store.find_mut(name) {
        Some(category) => {
            category.rename(new_name.clone());
            result.affected = 1;
            result.add_message(CmdMessage::success(format!(
                "'{}' was renamed to '{}'",
                name, new_name
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!("'{}' could not be found", name)));
        }
    }
    Ok(result)
}
