use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CategoryStore;
use crate::term::Term;

pub fn run(store: &mut CategoryStore, name: &Term) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.find_mut(name) {
        Some(category) => {
            let cleared = category.len();
            category.clear();
            result.affected = cleared;
            result.add_message(CmdMessage::success(format!(
                "Cleared {} word(s) from '{}'",
                cleared, name
            )));
        }
        None => {
            result.add_message(CmdMessage::warning(format!("'{}' could not be found", name)));
        }
    }
    Ok(result)
}
