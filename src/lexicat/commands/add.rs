use crate::category::Category;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;

pub fn run(store: &mut CategoryStore, names: &[Term]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut added = 0;

    for name in names {
        if name.is_empty() {
            continue;
        }
        if store.add(Category::new(name.clone())) {
            added += 1;
        } else {
            result.add_message(CmdMessage::warning(format!(
                "The category '{}' already exists",
                name
            )));
        }
    }

    result.affected = added;
    result.add_message(CmdMessage::success(format!(
        "{} new category name(s) added",
        added
    )));
    Ok(result)
}
